//! Authority component (`[userinfo@]host[:port]`) of a snap ID URI.

use std::fmt;

use crate::error::{HostError, UriError};
use crate::host::Host;
use crate::uri_shape::{HostRestriction, UriShapeConfig};

/// A validated URI authority.
///
/// # Examples
///
/// ```
/// use snap_id::{Authority, Host, UriShapeConfig};
///
/// let authority = Authority::parse("user:pass@[::1]:8080", &UriShapeConfig::npm_registry()).unwrap();
/// assert_eq!(authority.userinfo(), Some("user:pass"));
/// assert!(authority.host().is_ipv6());
/// assert_eq!(authority.port(), Some(8080));
/// assert_eq!(authority.to_string(), "user:pass@[::1]:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Authority {
    userinfo: Option<String>,
    host: Host,
    port: Option<u16>,
}

impl Authority {
    /// Parses an authority under the rules of `config`.
    ///
    /// # Errors
    ///
    /// Returns `UriError` if:
    /// - The host is missing or malformed
    /// - Userinfo or a port is present but not allowed
    /// - The userinfo or port is malformed
    /// - The host breaks the configured host restriction
    pub fn parse(input: &str, config: &UriShapeConfig) -> Result<Self, UriError> {
        if input.is_empty() {
            return Err(UriError::EmptyHost);
        }

        let (userinfo, host_port) = match input.split_once('@') {
            Some((userinfo, rest)) => {
                if !config.allow_userinfo {
                    return Err(UriError::UserinfoNotAllowed);
                }
                Self::validate_userinfo(userinfo)?;
                (Some(userinfo.to_string()), rest)
            }
            None => (None, input),
        };

        if host_port.is_empty() {
            return Err(UriError::EmptyHost);
        }

        let (host_str, port_str) = Self::split_host_port(host_port)?;
        if host_str.is_empty() {
            return Err(UriError::EmptyHost);
        }

        let host = Host::parse(host_str)?;

        // `host:` with nothing after the colon has no port.
        let port = match port_str.filter(|p| !p.is_empty()) {
            Some(p) => {
                if !config.allow_port {
                    return Err(UriError::PortNotAllowed);
                }
                Some(Self::parse_port(p)?)
            }
            None => None,
        };

        if config.host_restriction == HostRestriction::Loopback && !host.is_loopback() {
            return Err(UriError::HostNotLoopback {
                host: host.to_string(),
            });
        }

        Ok(Self {
            userinfo,
            host,
            port,
        })
    }

    /// Returns the userinfo, if present.
    #[must_use]
    pub fn userinfo(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    /// Returns the host.
    #[must_use]
    pub const fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the port, if specified.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    fn validate_userinfo(userinfo: &str) -> Result<(), UriError> {
        if userinfo.is_empty() {
            return Err(UriError::InvalidUserinfo {
                value: String::new(),
                reason: "userinfo cannot be empty",
            });
        }

        if userinfo.contains('@') || !userinfo.chars().all(|c| c.is_ascii_graphic()) {
            return Err(UriError::InvalidUserinfo {
                value: userinfo.to_string(),
                reason: "userinfo must be printable ASCII other than '@'",
            });
        }

        Ok(())
    }

    fn split_host_port(input: &str) -> Result<(&str, Option<&str>), UriError> {
        if input.starts_with('[') {
            let Some(close) = input.find(']') else {
                return Err(HostError::InvalidIpAddress {
                    value: input.to_string(),
                    reason: "missing closing bracket for IPv6 literal",
                }
                .into());
            };

            let host = &input[..=close];
            let rest = &input[close + 1..];
            if rest.is_empty() {
                return Ok((host, None));
            }

            return match rest.strip_prefix(':') {
                Some(port) => Ok((host, Some(port))),
                None => Err(UriError::InvalidPort {
                    value: rest.to_string(),
                    reason: "expected ':' after IPv6 closing bracket",
                }),
            };
        }

        if input.matches(':').count() > 1 {
            return Err(HostError::UnbracketedIpv6 {
                value: input.to_string(),
            }
            .into());
        }

        Ok(match input.split_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (input, None),
        })
    }

    fn parse_port(input: &str) -> Result<u16, UriError> {
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(UriError::InvalidPort {
                value: input.to_string(),
                reason: "port must be one or more digits",
            });
        }

        input.parse::<u16>().map_err(|_| UriError::InvalidPort {
            value: input.to_string(),
            reason: "port must be 0-65535",
        })
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{userinfo}@")?;
        }
        write!(f, "{}", self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;
    use crate::uri_shape::PathPolicy;

    fn open() -> UriShapeConfig {
        UriShapeConfig::new()
            .with_allow_userinfo(true)
            .with_allow_port(true)
    }

    #[test]
    fn parse_host_only() {
        let authority = Authority::parse("github.com", &open()).unwrap();
        assert_eq!(authority.host(), &Host::Hostname("github.com".to_string()));
        assert!(authority.userinfo().is_none());
        assert!(authority.port().is_none());
    }

    #[test]
    fn parse_host_with_port() {
        let authority = Authority::parse("127.0.0.1:8080", &open()).unwrap();
        assert_eq!(authority.host(), &Host::Ipv4(Ipv4Addr::LOCALHOST));
        assert_eq!(authority.port(), Some(8080));
    }

    #[test]
    fn parse_userinfo() {
        let authority = Authority::parse("foo:bar@localhost", &open()).unwrap();
        assert_eq!(authority.userinfo(), Some("foo:bar"));
        assert_eq!(authority.to_string(), "foo:bar@localhost");
    }

    #[test]
    fn userinfo_rejected_when_not_allowed() {
        let config = open().with_allow_userinfo(false);
        let result = Authority::parse("foo@localhost", &config);
        assert!(matches!(result, Err(UriError::UserinfoNotAllowed)));
    }

    #[test]
    fn double_at_fails() {
        let result = Authority::parse("a@b@localhost", &open());
        assert!(matches!(result, Err(UriError::InvalidHost(_))));
    }

    #[test]
    fn empty_userinfo_fails() {
        let result = Authority::parse("@localhost", &open());
        assert!(matches!(result, Err(UriError::InvalidUserinfo { .. })));
    }

    #[test]
    fn port_rejected_when_not_allowed() {
        let config = open().with_allow_port(false);
        let result = Authority::parse("localhost:8080", &config);
        assert!(matches!(result, Err(UriError::PortNotAllowed)));
    }

    #[test]
    fn invalid_ports_fail() {
        for input in ["localhost:http", "localhost:65536", "localhost:-1", "[::1]:x"] {
            let result = Authority::parse(input, &open());
            assert!(
                matches!(result, Err(UriError::InvalidPort { .. })),
                "{input} should fail with InvalidPort, got {result:?}"
            );
        }
    }

    #[test]
    fn empty_port_is_absent() {
        for (input, expected) in [("localhost:", "localhost"), ("[::1]:", "[::1]")] {
            let authority = Authority::parse(input, &open()).unwrap();
            assert_eq!(authority.port(), None, "{input}");
            assert_eq!(authority.to_string(), expected);
        }

        let no_ports = open().with_allow_port(false);
        assert!(Authority::parse("localhost:", &no_ports).is_ok());
        assert!(matches!(
            Authority::parse("localhost:1", &no_ports),
            Err(UriError::PortNotAllowed)
        ));
    }

    #[test]
    fn ipv6_with_port() {
        let authority = Authority::parse("[::1]:8080", &open()).unwrap();
        assert!(authority.host().is_ipv6());
        assert_eq!(authority.port(), Some(8080));
        assert_eq!(authority.to_string(), "[::1]:8080");
    }

    #[test]
    fn garbage_after_ipv6_fails() {
        let result = Authority::parse("[::1]8080", &open());
        assert!(matches!(result, Err(UriError::InvalidPort { .. })));
    }

    #[test]
    fn unbracketed_ipv6_fails() {
        let result = Authority::parse("::1", &open());
        assert!(matches!(
            result,
            Err(UriError::InvalidHost(HostError::UnbracketedIpv6 { .. }))
        ));
    }

    #[test]
    fn empty_host_fails() {
        for input in ["", "user@", ":8080"] {
            let result = Authority::parse(input, &open());
            assert!(matches!(result, Err(UriError::EmptyHost)), "{input}");
        }
    }

    #[test]
    fn loopback_restriction() {
        let config = open()
            .with_host_restriction(HostRestriction::Loopback)
            .with_path_policy(PathPolicy::Segments);

        assert!(Authority::parse("localhost:8080", &config).is_ok());
        assert!(Authority::parse("127.0.01", &config).is_ok());
        assert!(Authority::parse("[::1]", &config).is_ok());

        let result = Authority::parse("github.com", &config);
        assert!(matches!(result, Err(UriError::HostNotLoopback { .. })));
    }
}
