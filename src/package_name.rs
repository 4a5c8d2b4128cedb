//! npm package names.

use std::fmt;
use std::str::FromStr;

use crate::constants::MAX_NPM_PACKAGE_NAME_LENGTH;
use crate::error::PackageNameError;

/// Names the registry refuses regardless of other rules.
const BLOCKED_NAMES: &[&str] = &["node_modules", "favicon.ico"];

/// Node.js core modules; a package may not shadow one.
const CORE_MODULES: &[&str] = &[
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

/// A package name valid for publishing a new npm package.
///
/// # Constraints
///
/// - Non-empty, at most 214 characters
/// - Does not start with `.` or `_`, and has no surrounding whitespace
/// - Not a blocked name or Node.js core module name
/// - No uppercase letters
/// - No `~'!()*` in the final part
/// - URL-safe, with `@scope/name` allowed for scoped packages
///
/// # Examples
///
/// ```
/// use snap_id::PackageName;
///
/// let name = PackageName::parse("@metamask/example-snap").unwrap();
/// assert_eq!(name.scope(), Some("metamask"));
/// assert_eq!(name.name(), "example-snap");
///
/// assert!(PackageName::parse("Uppercase").is_err());
/// assert!(PackageName::parse("http").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    /// Parses a package name from a string.
    ///
    /// # Errors
    ///
    /// Returns `PackageNameError` describing the first rule the name breaks.
    pub fn parse(input: &str) -> Result<Self, PackageNameError> {
        if input.is_empty() {
            return Err(PackageNameError::Empty);
        }

        if input.starts_with('.') {
            return Err(PackageNameError::LeadingPeriod);
        }

        if input.starts_with('_') {
            return Err(PackageNameError::LeadingUnderscore);
        }

        if input.trim() != input {
            return Err(PackageNameError::SurroundingWhitespace);
        }

        let lowercase = input.to_lowercase();
        if BLOCKED_NAMES.contains(&lowercase.as_str()) {
            return Err(PackageNameError::Blocked {
                name: input.to_string(),
            });
        }

        if CORE_MODULES.contains(&input) {
            return Err(PackageNameError::CoreModule {
                name: input.to_string(),
            });
        }

        let length = input.chars().count();
        if length > MAX_NPM_PACKAGE_NAME_LENGTH {
            return Err(PackageNameError::TooLong {
                max: MAX_NPM_PACKAGE_NAME_LENGTH,
                actual: length,
            });
        }

        if let Some((position, c)) = input.char_indices().find(|(_, c)| c.is_uppercase()) {
            return Err(PackageNameError::Uppercase { char: c, position });
        }

        let final_start = input.rfind('/').map_or(0, |i| i + 1);
        if let Some((i, c)) = input[final_start..]
            .char_indices()
            .find(|(_, c)| Self::is_special_char(*c))
        {
            return Err(PackageNameError::SpecialChar {
                char: c,
                position: final_start + i,
            });
        }

        Self::validate_url_safe(input)?;

        Ok(Self(input.to_string()))
    }

    /// Returns the scope without `@`, for scoped packages.
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.0
            .strip_prefix('@')
            .and_then(|rest| rest.split_once('/'))
            .map(|(scope, _)| scope)
    }

    /// Returns the name without its scope.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.rsplit_once('/').map_or(&self.0, |(_, name)| name)
    }

    /// Returns the full package name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the character is left unescaped by `encodeURIComponent`.
    #[must_use]
    pub const fn is_url_safe_char(c: char) -> bool {
        c.is_ascii_alphanumeric()
            || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
    }

    const fn is_special_char(c: char) -> bool {
        matches!(c, '~' | '\'' | '!' | '(' | ')' | '*')
    }

    fn validate_url_safe(input: &str) -> Result<(), PackageNameError> {
        let first_unsafe = |s: &str, offset: usize| {
            s.char_indices()
                .find(|(_, c)| !Self::is_url_safe_char(*c))
                .map(|(i, c)| PackageNameError::NotUrlSafe {
                    char: c,
                    position: offset + i,
                })
        };

        let Some(unsafe_char) = first_unsafe(input, 0) else {
            return Ok(());
        };

        // `@scope/name` is the one accepted use of `@` and `/`.
        if let Some((scope, name)) = input.strip_prefix('@').and_then(|r| r.split_once('/')) {
            if scope.is_empty() || name.is_empty() {
                return Err(unsafe_char);
            }
            if let Some(e) = first_unsafe(scope, 1) {
                return Err(e);
            }
            if let Some(e) = first_unsafe(name, scope.len() + 2) {
                return Err(e);
            }
            return Ok(());
        }

        Err(unsafe_char)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PackageName {
    type Err = PackageNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PackageName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PackageName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_name() {
        let name = PackageName::parse("foo-bar").unwrap();
        assert_eq!(name.as_str(), "foo-bar");
        assert_eq!(name.name(), "foo-bar");
        assert!(name.scope().is_none());
    }

    #[test]
    fn parse_scoped_name() {
        let name = PackageName::parse("@foo/bar").unwrap();
        assert_eq!(name.scope(), Some("foo"));
        assert_eq!(name.name(), "bar");
    }

    #[test]
    fn parse_empty_fails() {
        assert!(matches!(PackageName::parse(""), Err(PackageNameError::Empty)));
    }

    #[test]
    fn parse_leading_period_fails() {
        assert!(matches!(
            PackageName::parse("."),
            Err(PackageNameError::LeadingPeriod)
        ));
    }

    #[test]
    fn parse_leading_underscore_fails() {
        assert!(matches!(
            PackageName::parse("_foo"),
            Err(PackageNameError::LeadingUnderscore)
        ));
    }

    #[test]
    fn parse_surrounding_whitespace_fails() {
        assert!(matches!(
            PackageName::parse(" foo"),
            Err(PackageNameError::SurroundingWhitespace)
        ));
    }

    #[test]
    fn parse_blocked_name_fails() {
        assert!(matches!(
            PackageName::parse("node_modules"),
            Err(PackageNameError::Blocked { .. })
        ));
        assert!(matches!(
            PackageName::parse("FAVICON.ICO"),
            Err(PackageNameError::Blocked { .. })
        ));
    }

    #[test]
    fn parse_core_module_fails() {
        assert!(matches!(
            PackageName::parse("fs"),
            Err(PackageNameError::CoreModule { .. })
        ));
    }

    #[test]
    fn parse_max_length() {
        let at_limit = "a".repeat(MAX_NPM_PACKAGE_NAME_LENGTH);
        assert!(PackageName::parse(&at_limit).is_ok());

        let over = "abcdefghij".repeat(22);
        assert!(matches!(
            PackageName::parse(&over),
            Err(PackageNameError::TooLong { max: 214, actual: 220 })
        ));
    }

    #[test]
    fn parse_uppercase_fails() {
        assert!(matches!(
            PackageName::parse("ASDASDasd"),
            Err(PackageNameError::Uppercase { char: 'A', position: 0 })
        ));
    }

    #[test]
    fn parse_special_char_fails() {
        assert!(matches!(
            PackageName::parse("excited!"),
            Err(PackageNameError::SpecialChar { char: '!', position: 7 })
        ));
    }

    #[test]
    fn parse_not_url_safe_fails() {
        assert!(matches!(
            PackageName::parse("foo bar"),
            Err(PackageNameError::NotUrlSafe { char: ' ', position: 3 })
        ));
        assert!(matches!(
            PackageName::parse("foo/bar"),
            Err(PackageNameError::NotUrlSafe { char: '/', position: 3 })
        ));
        assert!(matches!(
            PackageName::parse("foo#bar"),
            Err(PackageNameError::NotUrlSafe { char: '#', position: 3 })
        ));
    }

    #[test]
    fn parse_malformed_scope_fails() {
        assert!(PackageName::parse("@/bar").is_err());
        assert!(PackageName::parse("@foo/").is_err());
        assert!(PackageName::parse("@foo/bar/baz").is_err());
        assert!(matches!(
            PackageName::parse("@fo o/bar"),
            Err(PackageNameError::NotUrlSafe { char: ' ', position: 3 })
        ));
    }
}
