//! Configurable URI shape shared by every snap ID variant.
//!
//! # Grammar Reference
//!
//! ```abnf
//! uri       = scheme "://" authority path
//! authority = [ userinfo "@" ] host [ ":" port ]
//! path      = *( "/" segment ) [ "/" ]
//! ```
//!
//! Query (`?`) and fragment (`#`) components are never part of the shape;
//! their presence alone rejects the input.

use std::fmt;

use crate::authority::Authority;
use crate::error::UriError;
use crate::host::Host;
use crate::path::UriPath;

/// Which hosts a URI shape accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HostRestriction {
    /// Any hostname, IPv4, or bracketed IPv6 host
    #[default]
    Any,
    /// Only `localhost`, `127.0.0.1`, and `[::1]`
    Loopback,
}

/// Which paths a URI shape accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PathPolicy {
    /// No path at all
    Forbidden,
    /// An empty path or a single `/`
    #[default]
    TrailingSlash,
    /// Any sequence of `/segment` pairs with an optional trailing slash
    Segments,
}

/// Rules a URI must satisfy to match a shape.
///
/// # Examples
///
/// ```
/// use snap_id::{HostRestriction, PathPolicy, UriShapeConfig};
///
/// let config = UriShapeConfig::new()
///     .with_allowed_schemes(&["https"])
///     .with_allow_port(true)
///     .with_host_restriction(HostRestriction::Loopback)
///     .with_path_policy(PathPolicy::Forbidden);
///
/// assert!(config.allows_scheme("https"));
/// assert!(!config.allows_scheme("HTTPS"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UriShapeConfig {
    /// Schemes accepted before `://`, compared case-sensitively.
    ///
    /// Default: `http`, `https`
    pub allowed_schemes: &'static [&'static str],

    /// Whether `user[:pass]@` may precede the host.
    ///
    /// Default: false
    pub allow_userinfo: bool,

    /// Whether `:port` may follow the host.
    ///
    /// Default: false
    pub allow_port: bool,

    /// Which hosts are accepted.
    ///
    /// Default: [`HostRestriction::Any`]
    pub host_restriction: HostRestriction,

    /// Which paths are accepted.
    ///
    /// Default: [`PathPolicy::TrailingSlash`]
    pub path_policy: PathPolicy,
}

impl Default for UriShapeConfig {
    fn default() -> Self {
        Self {
            allowed_schemes: &["http", "https"],
            allow_userinfo: false,
            allow_port: false,
            host_restriction: HostRestriction::Any,
            path_policy: PathPolicy::TrailingSlash,
        }
    }
}

impl UriShapeConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shape of the URI following `local:`.
    #[must_use]
    pub const fn local() -> Self {
        Self {
            allowed_schemes: &["http", "https"],
            allow_userinfo: true,
            allow_port: true,
            host_restriction: HostRestriction::Loopback,
            path_policy: PathPolicy::Segments,
        }
    }

    /// Shape of an npm snap ID naming its registry (`npm://host/name`).
    #[must_use]
    pub const fn npm_registry() -> Self {
        Self {
            allowed_schemes: &["npm"],
            allow_userinfo: true,
            allow_port: true,
            host_restriction: HostRestriction::Any,
            path_policy: PathPolicy::Segments,
        }
    }

    /// Shape of an http snap ID.
    #[must_use]
    pub const fn http() -> Self {
        Self {
            allowed_schemes: &["http", "https"],
            allow_userinfo: false,
            allow_port: true,
            host_restriction: HostRestriction::Any,
            path_policy: PathPolicy::Segments,
        }
    }

    /// Sets the accepted schemes.
    #[must_use]
    pub const fn with_allowed_schemes(mut self, schemes: &'static [&'static str]) -> Self {
        self.allowed_schemes = schemes;
        self
    }

    /// Allows or forbids userinfo.
    #[must_use]
    pub const fn with_allow_userinfo(mut self, allow: bool) -> Self {
        self.allow_userinfo = allow;
        self
    }

    /// Allows or forbids a port.
    #[must_use]
    pub const fn with_allow_port(mut self, allow: bool) -> Self {
        self.allow_port = allow;
        self
    }

    /// Sets the host restriction.
    #[must_use]
    pub const fn with_host_restriction(mut self, restriction: HostRestriction) -> Self {
        self.host_restriction = restriction;
        self
    }

    /// Sets the path policy.
    #[must_use]
    pub const fn with_path_policy(mut self, policy: PathPolicy) -> Self {
        self.path_policy = policy;
        self
    }

    /// Returns true if `scheme` is one of the allowed schemes.
    #[must_use]
    pub fn allows_scheme(&self, scheme: &str) -> bool {
        self.allowed_schemes.iter().any(|allowed| *allowed == scheme)
    }
}

/// A URI validated against a [`UriShapeConfig`].
///
/// # Examples
///
/// ```
/// use snap_id::{UriShape, UriShapeConfig};
///
/// let uri = UriShape::parse("http://foo@127.0.01:8080/snap", &UriShapeConfig::local()).unwrap();
/// assert_eq!(uri.scheme(), "http");
/// assert_eq!(uri.authority().userinfo(), Some("foo"));
/// assert_eq!(uri.port(), Some(8080));
/// assert_eq!(uri.path().segments(), &["snap"]);
/// assert_eq!(uri.as_str(), "http://foo@127.0.0.1:8080/snap");
///
/// assert!(UriShape::parse("http://localhost/?debug", &UriShapeConfig::local()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UriShape {
    scheme: String,
    authority: Authority,
    path: UriPath,
    /// Normalized string representation
    normalized: String,
}

impl UriShape {
    /// Parses a URI under the rules of `config`.
    ///
    /// # Errors
    ///
    /// Returns `UriError` if:
    /// - The input is empty
    /// - The input contains `?` or `#`
    /// - The scheme is missing or not allowed
    /// - The scheme is not followed by `//`
    /// - The authority breaks any rule of `config`
    /// - The path breaks the configured path policy or is malformed
    pub fn parse(input: &str, config: &UriShapeConfig) -> Result<Self, UriError> {
        if input.is_empty() {
            return Err(UriError::Empty);
        }

        if let Some(position) = input.find(|c: char| c == '?' || c == '#') {
            return Err(if input[position..].starts_with('?') {
                UriError::QueryNotAllowed { position }
            } else {
                UriError::FragmentNotAllowed { position }
            });
        }

        let Some((scheme, rest)) = input.split_once(':') else {
            return Err(UriError::InvalidScheme { found: None });
        };
        if !config.allows_scheme(scheme) {
            return Err(UriError::InvalidScheme {
                found: Some(scheme.to_string()),
            });
        }

        let rest = rest.strip_prefix("//").ok_or(UriError::MissingAuthority)?;

        let (authority_str, path_str) = match rest.find('/') {
            Some(slash_idx) => rest.split_at(slash_idx),
            None => (rest, ""),
        };

        let authority = Authority::parse(authority_str, config)?;

        let path_allowed = match config.path_policy {
            PathPolicy::Forbidden => path_str.is_empty(),
            PathPolicy::TrailingSlash => path_str.is_empty() || path_str == "/",
            PathPolicy::Segments => true,
        };
        if !path_allowed {
            return Err(UriError::PathNotAllowed {
                path: path_str.to_string(),
            });
        }

        let path = UriPath::parse(path_str)?;
        let normalized = format!("{scheme}://{authority}{path}");

        Ok(Self {
            scheme: scheme.to_string(),
            authority,
            path,
            normalized,
        })
    }

    /// Returns the scheme, without `://`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the authority.
    #[must_use]
    pub const fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &Host {
        self.authority.host()
    }

    /// Returns the port, if specified.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.authority.port()
    }

    /// Returns the path.
    #[must_use]
    pub const fn path(&self) -> &UriPath {
        &self.path
    }

    /// Returns the normalized URI string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for UriShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl AsRef<str> for UriShape {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HostError;

    #[test]
    fn default_config() {
        let config = UriShapeConfig::default();
        assert_eq!(config.allowed_schemes, &["http", "https"]);
        assert!(!config.allow_userinfo);
        assert!(!config.allow_port);
        assert_eq!(config.host_restriction, HostRestriction::Any);
        assert_eq!(config.path_policy, PathPolicy::TrailingSlash);
    }

    #[test]
    fn builder_pattern() {
        let config = UriShapeConfig::new()
            .with_allowed_schemes(&["npm"])
            .with_allow_userinfo(true)
            .with_allow_port(true)
            .with_host_restriction(HostRestriction::Loopback)
            .with_path_policy(PathPolicy::Segments);

        assert_eq!(config.allowed_schemes, &["npm"]);
        assert!(config.allow_userinfo);
        assert!(config.allow_port);
        assert_eq!(config.host_restriction, HostRestriction::Loopback);
        assert_eq!(config.path_policy, PathPolicy::Segments);
    }

    #[test]
    fn parse_minimal() {
        let uri = UriShape::parse("http://localhost", &UriShapeConfig::default()).unwrap();
        assert_eq!(uri.scheme(), "http");
        assert_eq!(uri.host(), &Host::Hostname("localhost".to_string()));
        assert!(uri.path().is_empty());
        assert_eq!(uri.as_str(), "http://localhost");
    }

    #[test]
    fn trailing_slash_does_not_affect_validity() {
        let config = UriShapeConfig::default();
        assert!(UriShape::parse("http://localhost", &config).is_ok());
        assert!(UriShape::parse("http://localhost/", &config).is_ok());
    }

    #[test]
    fn scheme_is_case_sensitive() {
        let result = UriShape::parse("HTTP://localhost", &UriShapeConfig::default());
        assert!(matches!(
            result,
            Err(UriError::InvalidScheme { found: Some(ref s) }) if s == "HTTP"
        ));
    }

    #[test]
    fn missing_scheme_fails() {
        let result = UriShape::parse("127.0.0.1", &UriShapeConfig::local());
        assert!(matches!(result, Err(UriError::InvalidScheme { found: None })));
    }

    #[test]
    fn missing_authority_fails() {
        let result = UriShape::parse("http:localhost", &UriShapeConfig::default());
        assert!(matches!(result, Err(UriError::MissingAuthority)));
    }

    #[test]
    fn query_always_rejected() {
        let config = UriShapeConfig::http();
        let result = UriShape::parse("http://github.com/?foo=true", &config);
        assert!(matches!(
            result,
            Err(UriError::QueryNotAllowed { position: 18 })
        ));

        let result = UriShape::parse("http://github.com/snap?", &config);
        assert!(matches!(result, Err(UriError::QueryNotAllowed { .. })));
    }

    #[test]
    fn fragment_always_rejected() {
        let config = UriShapeConfig::http();
        let result = UriShape::parse("http://github.com/#foo", &config);
        assert!(matches!(
            result,
            Err(UriError::FragmentNotAllowed { position: 18 })
        ));

        let result = UriShape::parse("http://github.com/#", &config);
        assert!(matches!(result, Err(UriError::FragmentNotAllowed { .. })));
    }

    #[test]
    fn first_of_query_or_fragment_is_reported() {
        let result = UriShape::parse("http://localhost/42?foo=true#bar", &UriShapeConfig::local());
        assert!(matches!(result, Err(UriError::QueryNotAllowed { position: 19 })));
    }

    #[test]
    fn forbidden_path_policy() {
        let config = UriShapeConfig::default().with_path_policy(PathPolicy::Forbidden);
        assert!(UriShape::parse("http://localhost", &config).is_ok());

        let result = UriShape::parse("http://localhost/", &config);
        assert!(matches!(result, Err(UriError::PathNotAllowed { .. })));
    }

    #[test]
    fn trailing_slash_path_policy() {
        let config = UriShapeConfig::default();
        let result = UriShape::parse("http://localhost/snap", &config);
        assert!(matches!(
            result,
            Err(UriError::PathNotAllowed { ref path }) if path == "/snap"
        ));
    }

    #[test]
    fn segments_path_policy() {
        let uri = UriShape::parse("http://127.0.0.1/foo/bar", &UriShapeConfig::local()).unwrap();
        assert_eq!(uri.path().segments(), &["foo", "bar"]);
    }

    #[test]
    fn ipv6_host_normalizes() {
        let uri = UriShape::parse(
            "http://[0:0:0:0:0:0:0:1]:8080/",
            &UriShapeConfig::local(),
        )
        .unwrap();
        assert_eq!(uri.as_str(), "http://[::1]:8080/");
    }

    #[test]
    fn unbracketed_ipv6_fails() {
        let result = UriShape::parse("http://::1/", &UriShapeConfig::http());
        assert!(matches!(
            result,
            Err(UriError::InvalidHost(HostError::UnbracketedIpv6 { .. }))
        ));
    }

    #[test]
    fn non_loopback_host_fails_under_restriction() {
        let result = UriShape::parse("http://github.com", &UriShapeConfig::local());
        assert!(matches!(result, Err(UriError::HostNotLoopback { .. })));
    }

    #[test]
    fn empty_host_fails() {
        let result = UriShape::parse("http://", &UriShapeConfig::local());
        assert!(matches!(result, Err(UriError::EmptyHost)));
    }
}
