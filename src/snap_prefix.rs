//! Snap ID prefixes.

use std::fmt;

use crate::constants::{HTTP_PREFIX, LOCAL_PREFIX, NPM_PREFIX};

/// The kind of a snap ID, recognized from its leading characters.
///
/// # Examples
///
/// ```
/// use snap_id::SnapIdPrefix;
///
/// assert_eq!(SnapIdPrefix::detect("npm:foo"), Some(SnapIdPrefix::Npm));
/// assert_eq!(SnapIdPrefix::detect("https://github.com"), Some(SnapIdPrefix::Http));
/// assert_eq!(SnapIdPrefix::detect("foo:bar"), None);
/// assert_eq!(SnapIdPrefix::Local.as_str(), "local:");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SnapIdPrefix {
    /// `local:` followed by a loopback http(s) URI
    Local,
    /// `npm:` followed by a package name or `//registry/package`
    Npm,
    /// An `http:` or `https:` URI
    Http,
}

impl SnapIdPrefix {
    /// Every prefix, in the order [`SnapIdPrefix::detect`] tries them.
    pub const ALL: [Self; 3] = [Self::Local, Self::Npm, Self::Http];

    /// Returns the literal prefix string.
    ///
    /// `Http` also covers `https:` inputs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => LOCAL_PREFIX,
            Self::Npm => NPM_PREFIX,
            Self::Http => HTTP_PREFIX,
        }
    }

    /// Returns true if `input` starts with this prefix.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        match self {
            Self::Http => input.starts_with(HTTP_PREFIX) || input.starts_with("https:"),
            _ => input.starts_with(self.as_str()),
        }
    }

    /// Returns the first prefix that `input` starts with.
    #[must_use]
    pub fn detect(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prefix| prefix.matches(input))
    }
}

impl fmt::Display for SnapIdPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
