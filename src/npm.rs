//! `npm:` snap IDs.

use std::fmt;

use crate::authority::Authority;
use crate::constants::{DEFAULT_NPM_REGISTRY, NPM_PREFIX};
use crate::error::{NpmIdError, UriError};
use crate::package_name::PackageName;
use crate::uri_shape::{UriShape, UriShapeConfig};

/// The registry an npm snap is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NpmRegistry {
    /// The public registry at [`DEFAULT_NPM_REGISTRY`]
    Default,
    /// A registry named in the ID itself (`npm://host/package`)
    Custom(Authority),
}

impl NpmRegistry {
    /// Returns the base URL of the registry.
    #[must_use]
    pub fn url(&self) -> String {
        match self {
            Self::Default => DEFAULT_NPM_REGISTRY.to_string(),
            Self::Custom(authority) => format!("https://{authority}"),
        }
    }

    /// Returns true for the public registry.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

/// A snap published to an npm registry.
///
/// Two forms are accepted:
///
/// ```text
/// npm:<package-name>
/// npm://[userinfo@]host[:port]/<package-name>
/// ```
///
/// # Examples
///
/// ```
/// use snap_id::{NpmRegistry, NpmSnapId};
///
/// let id = NpmSnapId::parse("npm:@metamask/example-snap").unwrap();
/// assert_eq!(id.package().as_str(), "@metamask/example-snap");
/// assert_eq!(id.registry(), &NpmRegistry::Default);
///
/// let id = NpmSnapId::parse("npm://user@registry.com/bar").unwrap();
/// assert_eq!(id.registry().url(), "https://user@registry.com");
/// assert_eq!(id.package().as_str(), "bar");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NpmSnapId {
    registry: NpmRegistry,
    package: PackageName,
    normalized: String,
}

impl NpmSnapId {
    /// Parses an npm snap ID, including its `npm:` prefix.
    ///
    /// # Errors
    ///
    /// Returns `NpmIdError` if:
    /// - The input does not start with `npm:` (reported as an invalid registry)
    /// - The input contains a query or fragment
    /// - No package name is given
    /// - An explicit registry URI is malformed
    /// - The package name breaks an npm naming rule
    pub fn parse(input: &str) -> Result<Self, NpmIdError> {
        Self::parse_inner(input).inspect_err(|e| {
            tracing::trace!(input, error = %e, "rejected npm snap id");
        })
    }

    fn parse_inner(input: &str) -> Result<Self, NpmIdError> {
        let Some(body) = input.strip_prefix(NPM_PREFIX) else {
            return Err(NpmIdError::InvalidRegistry(UriError::InvalidScheme {
                found: None,
            }));
        };

        if let Some(position) = input.find(|c: char| c == '?' || c == '#') {
            return Err(if input[position..].starts_with('?') {
                NpmIdError::QueryNotAllowed { position }
            } else {
                NpmIdError::FragmentNotAllowed { position }
            });
        }

        if body.starts_with("//") {
            return Self::parse_with_registry(input);
        }

        if body.is_empty() {
            return Err(NpmIdError::MissingPackageName);
        }

        let package = PackageName::parse(body).map_err(NpmIdError::InvalidPackageName)?;
        Ok(Self {
            registry: NpmRegistry::Default,
            normalized: format!("{NPM_PREFIX}{package}"),
            package,
        })
    }

    fn parse_with_registry(input: &str) -> Result<Self, NpmIdError> {
        let uri = UriShape::parse(input, &UriShapeConfig::npm_registry())
            .map_err(NpmIdError::InvalidRegistry)?;

        let path = uri.path().to_string();
        let name = path.strip_prefix('/').unwrap_or(&path);
        if name.is_empty() {
            return Err(NpmIdError::MissingPackageName);
        }

        let package = PackageName::parse(name).map_err(NpmIdError::InvalidPackageName)?;
        Ok(Self {
            registry: NpmRegistry::Custom(uri.authority().clone()),
            package,
            normalized: uri.as_str().to_string(),
        })
    }

    /// Returns the registry.
    #[must_use]
    pub const fn registry(&self) -> &NpmRegistry {
        &self.registry
    }

    /// Returns the package name.
    #[must_use]
    pub const fn package(&self) -> &PackageName {
        &self.package
    }

    /// Returns the normalized snap ID, including `npm:`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for NpmSnapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl AsRef<str> for NpmSnapId {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PackageNameError;
    use crate::host::Host;

    #[test]
    fn parse_implicit_registry() {
        let id = NpmSnapId::parse("npm:foo-bar").unwrap();
        assert!(id.registry().is_default());
        assert_eq!(id.registry().url(), DEFAULT_NPM_REGISTRY);
        assert_eq!(id.package().as_str(), "foo-bar");
        assert_eq!(id.as_str(), "npm:foo-bar");
    }

    #[test]
    fn parse_scoped_package() {
        let id = NpmSnapId::parse("npm:@foo/bar").unwrap();
        assert_eq!(id.package().scope(), Some("foo"));
    }

    #[test]
    fn parse_explicit_registry() {
        let id = NpmSnapId::parse("npm://registry.com/@foo/bar").unwrap();
        let NpmRegistry::Custom(authority) = id.registry() else {
            panic!("expected custom registry");
        };
        assert_eq!(authority.host(), &Host::Hostname("registry.com".to_string()));
        assert_eq!(id.package().as_str(), "@foo/bar");
        assert_eq!(id.as_str(), "npm://registry.com/@foo/bar");
    }

    #[test]
    fn parse_registry_with_userinfo_and_port() {
        let id = NpmSnapId::parse("npm://user:pass@[::1]:8080/bar").unwrap();
        let NpmRegistry::Custom(authority) = id.registry() else {
            panic!("expected custom registry");
        };
        assert_eq!(authority.userinfo(), Some("user:pass"));
        assert_eq!(authority.port(), Some(8080));
        assert_eq!(id.registry().url(), "https://user:pass@[::1]:8080");
    }

    #[test]
    fn missing_package_fails() {
        for input in ["npm:", "npm://registry.com", "npm://registry.com/"] {
            assert!(
                matches!(NpmSnapId::parse(input), Err(NpmIdError::MissingPackageName)),
                "{input}"
            );
        }
    }

    #[test]
    fn query_and_fragment_fail() {
        assert!(matches!(
            NpmSnapId::parse("npm:foo?bar=true"),
            Err(NpmIdError::QueryNotAllowed { position: 7 })
        ));
        assert!(matches!(
            NpmSnapId::parse("npm:foo#bar"),
            Err(NpmIdError::FragmentNotAllowed { position: 7 })
        ));
        assert!(matches!(
            NpmSnapId::parse("npm://registry.com/snap?foo=true#bar"),
            Err(NpmIdError::QueryNotAllowed { .. })
        ));
    }

    #[test]
    fn invalid_package_name_fails() {
        assert!(matches!(
            NpmSnapId::parse("npm:ASDASDasd"),
            Err(NpmIdError::InvalidPackageName(PackageNameError::Uppercase { .. }))
        ));
        assert!(matches!(
            NpmSnapId::parse("npm:http://registry.com/foo"),
            Err(NpmIdError::InvalidPackageName(PackageNameError::NotUrlSafe { char: ':', .. }))
        ));
        assert!(matches!(
            NpmSnapId::parse("npm:/foo"),
            Err(NpmIdError::InvalidPackageName(_))
        ));
    }

    #[test]
    fn invalid_registry_fails() {
        let result = NpmSnapId::parse("npm://-bad-/foo");
        assert!(matches!(result, Err(NpmIdError::InvalidRegistry(UriError::InvalidHost(_)))));
    }

    #[test]
    fn missing_prefix_fails() {
        assert!(matches!(
            NpmSnapId::parse("local:foo"),
            Err(NpmIdError::InvalidRegistry(UriError::InvalidScheme { found: None }))
        ));
    }
}
