//! `http:`/`https:` snap IDs.

use std::fmt;

use crate::error::UriError;
use crate::uri_shape::{UriShape, UriShapeConfig};

/// A snap fetched from an http(s) server, e.g. `https://github.com/@foo/bar`.
///
/// Any host is accepted. A port and a path are allowed; userinfo, a query,
/// and a fragment are not.
///
/// # Examples
///
/// ```
/// use snap_id::HttpSnapId;
///
/// let id = HttpSnapId::parse("https://GitHub.com/@foo/bar").unwrap();
/// assert_eq!(id.as_str(), "https://github.com/@foo/bar");
///
/// assert!(HttpSnapId::parse("http://github.com/?foo=true").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HttpSnapId {
    uri: UriShape,
}

impl HttpSnapId {
    /// Parses an http snap ID.
    ///
    /// # Errors
    ///
    /// Returns `UriError` if:
    /// - The scheme is not `http` or `https`
    /// - The authority is missing or malformed, or carries userinfo
    /// - The path is malformed
    /// - The URI contains a query or fragment
    pub fn parse(input: &str) -> Result<Self, UriError> {
        let uri = UriShape::parse(input, &UriShapeConfig::http()).inspect_err(|e| {
            tracing::trace!(input, error = %e, "rejected http snap id");
        })?;
        Ok(Self { uri })
    }

    /// Returns the decomposed URI.
    #[must_use]
    pub const fn uri(&self) -> &UriShape {
        &self.uri
    }

    /// Returns the normalized snap ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.uri.as_str()
    }
}

impl fmt::Display for HttpSnapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri)
    }
}

impl AsRef<str> for HttpSnapId {
    fn as_ref(&self) -> &str {
        self.uri.as_str()
    }
}
