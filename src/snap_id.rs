//! Snap IDs and the top-level validator.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::candidate::Candidate;
use crate::error::SnapIdError;
use crate::http::HttpSnapId;
use crate::local::LocalSnapId;
use crate::npm::NpmSnapId;
use crate::snap_prefix::SnapIdPrefix;

/// A validated snap ID.
///
/// # Examples
///
/// ```
/// use snap_id::{SnapId, SnapIdPrefix};
///
/// let id = SnapId::parse("npm:@metamask/example-snap").unwrap();
/// assert_eq!(id.prefix(), SnapIdPrefix::Npm);
/// assert_eq!(id.strip_prefix(), "@metamask/example-snap");
///
/// let id = SnapId::parse("local:http://LOCALHOST:8080").unwrap();
/// assert_eq!(id.as_str(), "local:http://localhost:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SnapId {
    /// A `local:` snap ID
    Local(LocalSnapId),
    /// An `npm:` snap ID
    Npm(NpmSnapId),
    /// An `http:`/`https:` snap ID
    Http(HttpSnapId),
}

impl SnapId {
    /// Parses a snap ID from a string.
    ///
    /// The prefix is recognized first and the rest of the input is then
    /// validated by the matching variant.
    ///
    /// # Errors
    ///
    /// Returns `SnapIdError` if:
    /// - The input starts with no known prefix
    /// - The input has a known prefix but is malformed for that variant
    pub fn parse(input: &str) -> Result<Self, SnapIdError> {
        let Some(prefix) = SnapIdPrefix::detect(input) else {
            return Err(SnapIdError::UnknownPrefix {
                input: input.to_string(),
            });
        };

        match prefix {
            SnapIdPrefix::Local => LocalSnapId::parse(input).map(Self::Local).map_err(|reason| {
                SnapIdError::MalformedLocal {
                    input: input.to_string(),
                    reason,
                }
            }),
            SnapIdPrefix::Npm => NpmSnapId::parse(input).map(Self::Npm).map_err(|reason| {
                SnapIdError::MalformedNpm {
                    input: input.to_string(),
                    reason,
                }
            }),
            SnapIdPrefix::Http => HttpSnapId::parse(input).map(Self::Http).map_err(|reason| {
                SnapIdError::MalformedHttp {
                    input: input.to_string(),
                    reason,
                }
            }),
        }
    }

    /// Returns the prefix this ID was recognized by.
    #[must_use]
    pub const fn prefix(&self) -> SnapIdPrefix {
        match self {
            Self::Local(_) => SnapIdPrefix::Local,
            Self::Npm(_) => SnapIdPrefix::Npm,
            Self::Http(_) => SnapIdPrefix::Http,
        }
    }

    /// Returns the normalized snap ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Local(id) => id.as_str(),
            Self::Npm(id) => id.as_str(),
            Self::Http(id) => id.as_str(),
        }
    }

    /// Returns the ID without its `local:` or `npm:` prefix.
    ///
    /// Http IDs are returned whole, since their prefix is the URI scheme.
    #[must_use]
    pub fn strip_prefix(&self) -> &str {
        let s = self.as_str();
        match self {
            Self::Http(_) => s,
            _ => s.strip_prefix(self.prefix().as_str()).unwrap_or(s),
        }
    }

    /// Returns true for `local:` IDs.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

/// Validates a value of unknown runtime type as a snap ID.
///
/// Non-string values fail with [`SnapIdError::NotAString`]; strings are
/// handed to [`SnapId::parse`].
///
/// # Errors
///
/// Returns `SnapIdError` if:
/// - `value` is not a string
/// - The string starts with no known prefix
/// - The string is malformed for the variant its prefix names
///
/// # Examples
///
/// ```
/// use snap_id::{validate_snap_id, Candidate, SnapIdError};
///
/// assert!(validate_snap_id("npm:foo").is_ok());
///
/// let err = validate_snap_id(Candidate::Null).unwrap_err();
/// assert_eq!(err, SnapIdError::NotAString);
/// assert_eq!(err.to_string(), "Invalid snap id. Not a string.");
///
/// let err = validate_snap_id("foo:bar").unwrap_err();
/// assert_eq!(err.to_string(), "Invalid snap id. Unknown prefix.");
/// ```
pub fn validate_snap_id<'a>(value: impl Into<Candidate<'a>>) -> Result<SnapId, SnapIdError> {
    let candidate: Candidate<'a> = value.into();
    let Some(input) = candidate.as_str() else {
        tracing::debug!(kind = candidate.type_name(), "rejected snap id: not a string");
        return Err(SnapIdError::NotAString);
    };

    match SnapId::parse(input) {
        Ok(id) => {
            tracing::trace!(snap_id = %id, prefix = %id.prefix(), "validated snap id");
            Ok(id)
        }
        Err(e) => {
            tracing::debug!(input, error = %e, "rejected snap id");
            Err(e)
        }
    }
}

impl fmt::Display for SnapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SnapId {
    type Err = SnapIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for SnapId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<&str> for SnapId {
    type Error = SnapIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for SnapId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SnapId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SnapId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SnapId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
