//! Host component of a snap ID URI.
//!
//! # Grammar Reference
//!
//! ```abnf
//! host        = ip-literal / ipv4-address / hostname
//! ip-literal  = "[" IPv6address "]"
//! hostname    = label *( "." label ) [ "." ]
//! label       = 1*63( ALPHA / DIGIT / "-" / "_" )
//! ```
//!
//! A host whose last label looks numeric is parsed as an IPv4 address the
//! way URL parsers do: one to four dotted parts, each decimal, octal
//! (leading `0`) or hex (leading `0x`), with the last part filling the
//! remaining bytes. `127.1` and `127.0.01` both denote `127.0.0.1`.

use std::cmp::Ordering;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::constants::{MAX_DNS_DOMAIN_LENGTH, MAX_DNS_LABEL_LENGTH};
use crate::error::HostError;

/// A parsed host.
///
/// # Examples
///
/// ```
/// use snap_id::Host;
///
/// let host = Host::parse("LocalHost").unwrap();
/// assert_eq!(host, Host::Hostname("localhost".to_string()));
/// assert!(host.is_loopback());
///
/// let host = Host::parse("127.0.01").unwrap();
/// assert_eq!(host.to_string(), "127.0.0.1");
///
/// let host = Host::parse("[::1]").unwrap();
/// assert!(host.is_loopback());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// A DNS hostname, normalized to lowercase (e.g., "github.com")
    Hostname(String),
    /// An IPv4 address (e.g., "127.0.0.1")
    Ipv4(Ipv4Addr),
    /// An IPv6 address, written bracketed in URIs (e.g., `[::1]`)
    Ipv6(Ipv6Addr),
}

impl Host {
    /// Parses a host from a string.
    ///
    /// IPv6 addresses must be enclosed in brackets.
    ///
    /// # Errors
    ///
    /// Returns `HostError` if:
    /// - A bracketed literal is not a valid IPv6 address
    /// - An unbracketed IPv6 address is given
    /// - A numeric host is not a valid IPv4 address
    /// - A hostname contains invalid characters or labels
    pub fn parse(input: &str) -> Result<Self, HostError> {
        if let Some(inner) = input.strip_prefix('[') {
            return Self::parse_ipv6_literal(input, inner);
        }

        if input.parse::<Ipv6Addr>().is_ok() {
            return Err(HostError::UnbracketedIpv6 {
                value: input.to_string(),
            });
        }

        if Self::ends_in_number(input) {
            return Self::parse_ipv4(input).map(Self::Ipv4);
        }

        Self::validate_hostname(input)?;
        Ok(Self::Hostname(input.to_ascii_lowercase()))
    }

    /// Returns true if this is `localhost`, `127.0.0.1`, or `::1`.
    #[must_use]
    pub fn is_loopback(&self) -> bool {
        match self {
            Self::Hostname(h) => h == "localhost",
            Self::Ipv4(ip) => *ip == Ipv4Addr::LOCALHOST,
            Self::Ipv6(ip) => *ip == Ipv6Addr::LOCALHOST,
        }
    }

    /// Returns true if this is a bracketed IPv6 literal.
    #[must_use]
    pub const fn is_ipv6(&self) -> bool {
        matches!(self, Self::Ipv6(_))
    }

    fn parse_ipv6_literal(input: &str, inner: &str) -> Result<Self, HostError> {
        let addr = inner
            .strip_suffix(']')
            .ok_or_else(|| HostError::InvalidIpAddress {
                value: input.to_string(),
                reason: "missing closing bracket for IPv6 literal",
            })?;

        addr.parse::<Ipv6Addr>()
            .map(Self::Ipv6)
            .map_err(|_| HostError::InvalidIpAddress {
                value: addr.to_string(),
                reason: "invalid IPv6 address",
            })
    }

    /// A trailing empty label (`127.0.0.1.`) is ignored when deciding.
    fn ends_in_number(input: &str) -> bool {
        let mut labels: Vec<&str> = input.split('.').collect();
        if labels.len() > 1 && labels.last().is_some_and(|l| l.is_empty()) {
            labels.pop();
        }
        let Some(last) = labels.last() else {
            return false;
        };

        if !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()) {
            return true;
        }

        last.strip_prefix("0x")
            .or_else(|| last.strip_prefix("0X"))
            .is_some_and(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
    }

    fn parse_ipv4(input: &str) -> Result<Ipv4Addr, HostError> {
        let invalid = |reason| HostError::InvalidIpAddress {
            value: input.to_string(),
            reason,
        };

        let mut parts: Vec<&str> = input.split('.').collect();
        if parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }
        if parts.len() > 4 {
            return Err(invalid("IPv4 address has more than four parts"));
        }

        let mut numbers = Vec::with_capacity(parts.len());
        for part in &parts {
            numbers.push(Self::parse_ipv4_number(part).ok_or_else(|| invalid("invalid IPv4 part"))?);
        }

        let Some((&last, leading)) = numbers.split_last() else {
            return Err(invalid("IPv4 address is empty"));
        };

        if leading.iter().any(|&n| n > 255) {
            return Err(invalid("IPv4 part exceeds 255"));
        }

        // `parts.len()` is 1..=4, so the shift is 8..=32 bits.
        let last_limit = 1u64 << (8 * (5 - numbers.len()));
        if last >= last_limit {
            return Err(invalid("IPv4 address out of range"));
        }

        let mut value = last;
        for (i, &n) in leading.iter().enumerate() {
            value += n << (8 * (3 - i));
        }

        u32::try_from(value)
            .map(Ipv4Addr::from)
            .map_err(|_| invalid("IPv4 address out of range"))
    }

    fn parse_ipv4_number(part: &str) -> Option<u64> {
        if part.is_empty() {
            return None;
        }

        let (digits, radix) = if let Some(hex) = part
            .strip_prefix("0x")
            .or_else(|| part.strip_prefix("0X"))
        {
            (hex, 16)
        } else if part.len() > 1 && part.starts_with('0') {
            (&part[1..], 8)
        } else {
            (part, 10)
        };

        if digits.is_empty() {
            return Some(0);
        }

        u64::from_str_radix(digits, radix).ok()
    }

    /// A single trailing dot (`github.com.`) marks a fully qualified name
    /// and is kept as written.
    fn validate_hostname(input: &str) -> Result<(), HostError> {
        let domain = match input.strip_suffix('.') {
            Some(rest) if !rest.is_empty() => rest,
            _ => input,
        };

        if domain.len() > MAX_DNS_DOMAIN_LENGTH {
            return Err(HostError::InvalidDomain {
                domain: domain.to_string(),
                reason: "domain exceeds 253 character limit",
            });
        }

        let mut offset = 0;
        for label in domain.split('.') {
            if label.is_empty() {
                return Err(HostError::InvalidDomain {
                    domain: domain.to_string(),
                    reason: "empty label (consecutive dots or leading/trailing dot)",
                });
            }

            if label.len() > MAX_DNS_LABEL_LENGTH {
                return Err(HostError::LabelTooLong {
                    label: label.to_string(),
                    max: MAX_DNS_LABEL_LENGTH,
                    actual: label.len(),
                });
            }

            for (j, c) in label.char_indices() {
                if !c.is_ascii_alphanumeric() && c != '-' && c != '_' {
                    return Err(HostError::InvalidChar {
                        char: c,
                        position: offset + j,
                    });
                }
            }

            if label.starts_with('-') || label.ends_with('-') {
                return Err(HostError::InvalidDomain {
                    domain: domain.to_string(),
                    reason: "label cannot start or end with hyphen",
                });
            }

            offset += label.len() + 1;
        }

        Ok(())
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hostname(h) => write!(f, "{h}"),
            Self::Ipv4(ip) => write!(f, "{ip}"),
            Self::Ipv6(ip) => write!(f, "[{ip}]"),
        }
    }
}

impl FromStr for Host {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialOrd for Host {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Host {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Hostname(a), Self::Hostname(b)) => a.cmp(b),
            (Self::Ipv4(a), Self::Ipv4(b)) => a.cmp(b),
            (Self::Ipv6(a), Self::Ipv6(b)) => a.cmp(b),
            (Self::Hostname(_), _) | (Self::Ipv4(_), Self::Ipv6(_)) => Ordering::Less,
            (_, Self::Hostname(_)) | (Self::Ipv6(_), Self::Ipv4(_)) => Ordering::Greater,
        }
    }
}
