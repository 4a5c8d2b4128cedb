//! Path component of a snap ID URI.

use std::fmt;

use crate::error::PathError;

/// A validated URI path.
///
/// The path is either empty or a sequence of `/segment` pairs with an
/// optional trailing slash. Segment characters follow RFC 3986 `pchar`:
/// unreserved characters, percent escapes, sub-delimiters, `:` and `@`.
///
/// # Examples
///
/// ```
/// use snap_id::UriPath;
///
/// let path = UriPath::parse("/@foo/bar").unwrap();
/// assert_eq!(path.segments(), &["@foo", "bar"]);
/// assert!(!path.has_trailing_slash());
///
/// let root = UriPath::parse("/").unwrap();
/// assert!(root.is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UriPath {
    segments: Vec<String>,
    trailing_slash: bool,
}

impl UriPath {
    /// Parses a path from a string.
    ///
    /// The input must be empty or start with `/`.
    ///
    /// # Errors
    ///
    /// Returns `PathError` if:
    /// - The path does not start with `/`
    /// - Two slashes enclose an empty segment
    /// - A segment contains a character outside `pchar`
    /// - A `%` is not followed by two hex digits
    pub fn parse(input: &str) -> Result<Self, PathError> {
        if input.is_empty() {
            return Ok(Self::default());
        }

        let Some(body) = input.strip_prefix('/') else {
            return Err(PathError::InvalidChar {
                char: input.chars().next().unwrap_or('/'),
                position: 0,
            });
        };

        if body.is_empty() {
            return Ok(Self {
                segments: Vec::new(),
                trailing_slash: true,
            });
        }

        let (body, trailing_slash) = match body.strip_suffix('/') {
            Some(rest) => (rest, true),
            None => (body, false),
        };

        let mut segments = Vec::new();
        let mut offset = 1;
        for (index, segment) in body.split('/').enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment { index });
            }
            Self::validate_segment(segment, offset)?;
            segments.push(segment.to_string());
            offset += segment.len() + 1;
        }

        Ok(Self {
            segments,
            trailing_slash,
        })
    }

    /// Returns the path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns true if the path is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && !self.trailing_slash
    }

    /// Returns true if the path is exactly `/`.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty() && self.trailing_slash
    }

    /// Returns true if the path ends with `/`.
    #[must_use]
    pub const fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    /// Returns true if the character may appear unescaped in a segment.
    #[must_use]
    pub const fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric()
            || matches!(
                c,
                '-' | '.' | '_' | '~' | '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ','
                    | ';' | '=' | ':' | '@'
            )
    }

    fn validate_segment(segment: &str, offset: usize) -> Result<(), PathError> {
        let bytes = segment.as_bytes();
        for (i, c) in segment.char_indices() {
            if c == '%' {
                let escaped = bytes
                    .get(i + 1..i + 3)
                    .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
                if !escaped {
                    return Err(PathError::InvalidPercentEncoding {
                        position: offset + i,
                    });
                }
            } else if !Self::is_valid_char(c) {
                return Err(PathError::InvalidChar {
                    char: c,
                    position: offset + i,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for UriPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        if self.trailing_slash {
            write!(f, "/")?;
        }
        Ok(())
    }
}
