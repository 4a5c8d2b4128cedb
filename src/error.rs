//! Error types for snap ID and chain ID validation.

use std::fmt;

/// Errors that can occur when validating a snap ID.
///
/// The `Display` output of [`SnapIdError::NotAString`] and
/// [`SnapIdError::UnknownPrefix`] is fixed; callers match on those strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapIdError {
    /// The input is not a string
    NotAString,
    /// The input matches none of the known snap ID prefixes
    UnknownPrefix {
        /// The rejected input
        input: String,
    },
    /// The input has the `local:` prefix but a malformed body
    MalformedLocal {
        /// The rejected input
        input: String,
        /// Why the body was rejected
        reason: UriError,
    },
    /// The input has the `npm:` prefix but a malformed body
    MalformedNpm {
        /// The rejected input
        input: String,
        /// Why the body was rejected
        reason: NpmIdError,
    },
    /// The input has an `http:`/`https:` scheme but is malformed
    MalformedHttp {
        /// The rejected input
        input: String,
        /// Why the URI was rejected
        reason: UriError,
    },
}

impl fmt::Display for SnapIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAString => write!(f, "Invalid snap id. Not a string."),
            Self::UnknownPrefix { .. } => write!(f, "Invalid snap id. Unknown prefix."),
            Self::MalformedLocal { input, reason } => {
                write!(f, "invalid local snap id '{input}': {reason}")
            }
            Self::MalformedNpm { input, reason } => {
                write!(f, "invalid npm snap id '{input}': {reason}")
            }
            Self::MalformedHttp { input, reason } => {
                write!(f, "invalid http snap id '{input}': {reason}")
            }
        }
    }
}

impl std::error::Error for SnapIdError {}

/// Errors from the shared URI shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// URI is empty
    Empty,
    /// Missing or disallowed scheme
    InvalidScheme {
        /// The scheme that was found, if any
        found: Option<String>,
    },
    /// Scheme is not followed by `//`
    MissingAuthority,
    /// Authority has no host
    EmptyHost,
    /// Userinfo present where the shape forbids it
    UserinfoNotAllowed,
    /// Userinfo contains an invalid character or is empty
    InvalidUserinfo {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Host parsing failed
    InvalidHost(HostError),
    /// Host is not a loopback address where one is required
    HostNotLoopback {
        /// The rejected host
        host: String,
    },
    /// Port present where the shape forbids it
    PortNotAllowed,
    /// Invalid port number
    InvalidPort {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Path present where the shape forbids it
    PathNotAllowed {
        /// The rejected path
        path: String,
    },
    /// Path parsing failed
    InvalidPath(PathError),
    /// A query component is present
    QueryNotAllowed {
        /// Position of the `?`
        position: usize,
    },
    /// A fragment component is present
    FragmentNotAllowed {
        /// Position of the `#`
        position: usize,
    },
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "URI cannot be empty"),
            Self::InvalidScheme { found } => match found {
                Some(s) => write!(f, "scheme '{s}' is not allowed"),
                None => write!(f, "missing scheme"),
            },
            Self::MissingAuthority => write!(f, "expected '//' after scheme"),
            Self::EmptyHost => write!(f, "host cannot be empty"),
            Self::UserinfoNotAllowed => write!(f, "userinfo is not allowed"),
            Self::InvalidUserinfo { value, reason } => {
                write!(f, "invalid userinfo '{value}': {reason}")
            }
            Self::InvalidHost(e) => write!(f, "invalid host: {e}"),
            Self::HostNotLoopback { host } => {
                write!(
                    f,
                    "host '{host}' is not a loopback address; expected localhost, 127.0.0.1 or [::1]"
                )
            }
            Self::PortNotAllowed => write!(f, "port is not allowed"),
            Self::InvalidPort { value, reason } => {
                write!(f, "invalid port '{value}': {reason}")
            }
            Self::PathNotAllowed { path } => write!(f, "path '{path}' is not allowed"),
            Self::InvalidPath(e) => write!(f, "invalid path: {e}"),
            Self::QueryNotAllowed { position } => {
                write!(f, "query at position {position} is not allowed")
            }
            Self::FragmentNotAllowed { position } => {
                write!(f, "fragment at position {position} is not allowed")
            }
        }
    }
}

impl std::error::Error for UriError {}

impl From<HostError> for UriError {
    fn from(e: HostError) -> Self {
        Self::InvalidHost(e)
    }
}

impl From<PathError> for UriError {
    fn from(e: PathError) -> Self {
        Self::InvalidPath(e)
    }
}

/// Errors for host parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Invalid domain name
    InvalidDomain {
        /// The invalid domain
        domain: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// DNS label too long
    LabelTooLong {
        /// The too-long label
        label: String,
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Invalid character in host
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Invalid IP address literal
    InvalidIpAddress {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// IPv6 literal without the surrounding brackets
    UnbracketedIpv6 {
        /// The unbracketed value
        value: String,
    },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDomain { domain, reason } => {
                write!(f, "invalid domain '{domain}': {reason}")
            }
            Self::LabelTooLong { label, max, actual } => {
                write!(f, "DNS label '{label}' is {actual} chars, max is {max}")
            }
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
            Self::InvalidIpAddress { value, reason } => {
                write!(f, "invalid IP address '{value}': {reason}")
            }
            Self::UnbracketedIpv6 { value } => {
                write!(f, "IPv6 address '{value}' must be enclosed in brackets")
            }
        }
    }
}

impl std::error::Error for HostError {}

/// Errors for URI path parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Empty segment between two slashes
    EmptySegment {
        /// Index of the segment
        index: usize,
    },
    /// Character outside the path character set
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the path
        position: usize,
    },
    /// `%` not followed by two hex digits
    InvalidPercentEncoding {
        /// Position of the `%`
        position: usize,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySegment { index } => write!(f, "segment {index} is empty"),
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
            Self::InvalidPercentEncoding { position } => {
                write!(f, "invalid percent encoding at position {position}")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Errors for the body of an npm snap ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NpmIdError {
    /// No package name follows the prefix or registry
    MissingPackageName,
    /// The explicit registry URI is malformed
    InvalidRegistry(UriError),
    /// The package name breaks an npm naming rule
    InvalidPackageName(PackageNameError),
    /// A query component is present
    QueryNotAllowed {
        /// Position of the `?`
        position: usize,
    },
    /// A fragment component is present
    FragmentNotAllowed {
        /// Position of the `#`
        position: usize,
    },
}

impl fmt::Display for NpmIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPackageName => write!(f, "package name is required"),
            Self::InvalidRegistry(e) => write!(f, "invalid registry: {e}"),
            Self::InvalidPackageName(e) => write!(f, "invalid package name: {e}"),
            Self::QueryNotAllowed { position } => {
                write!(f, "query at position {position} is not allowed")
            }
            Self::FragmentNotAllowed { position } => {
                write!(f, "fragment at position {position} is not allowed")
            }
        }
    }
}

impl std::error::Error for NpmIdError {}

/// Errors for npm package name validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageNameError {
    /// Name is empty
    Empty,
    /// Name exceeds maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Name starts with a period
    LeadingPeriod,
    /// Name starts with an underscore
    LeadingUnderscore,
    /// Name has leading or trailing whitespace
    SurroundingWhitespace,
    /// Name is reserved by the registry
    Blocked {
        /// The blocked name
        name: String,
    },
    /// Name collides with a Node.js core module
    CoreModule {
        /// The core module name
        name: String,
    },
    /// Name contains an uppercase letter
    Uppercase {
        /// The uppercase character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Name contains one of `~'!()*`
    SpecialChar {
        /// The special character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Name contains a character that is not URL-safe
    NotUrlSafe {
        /// The offending character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for PackageNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "name length must be greater than zero"),
            Self::TooLong { max, actual } => {
                write!(f, "name length {actual} exceeds maximum {max}")
            }
            Self::LeadingPeriod => write!(f, "name cannot start with a period"),
            Self::LeadingUnderscore => write!(f, "name cannot start with an underscore"),
            Self::SurroundingWhitespace => {
                write!(f, "name cannot contain leading or trailing spaces")
            }
            Self::Blocked { name } => write!(f, "{name} is a blocked name"),
            Self::CoreModule { name } => write!(f, "{name} is a core module name"),
            Self::Uppercase { char, position } => {
                write!(
                    f,
                    "uppercase character '{char}' at position {position}; names must be lowercase"
                )
            }
            Self::SpecialChar { char, position } => {
                write!(
                    f,
                    "special character '{char}' at position {position}; ~'!()* are not allowed"
                )
            }
            Self::NotUrlSafe { char, position } => {
                write!(
                    f,
                    "character '{char}' at position {position} is not URL-friendly"
                )
            }
        }
    }
}

impl std::error::Error for PackageNameError {}

/// Errors for CAIP-2 chain ID parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainIdError {
    /// No `:` separates namespace and reference
    MissingSeparator,
    /// Namespace is shorter than the minimum
    NamespaceTooShort {
        /// Minimum allowed length
        min: usize,
        /// Actual length
        actual: usize,
    },
    /// Namespace is longer than the maximum
    NamespaceTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Namespace contains a character outside `[-a-z0-9]`
    NamespaceChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Reference is empty
    ReferenceTooShort,
    /// Reference is longer than the maximum
    ReferenceTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Reference contains a character outside `[-a-zA-Z0-9]`
    ReferenceChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for ChainIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => {
                write!(f, "missing ':' between namespace and reference")
            }
            Self::NamespaceTooShort { min, actual } => {
                write!(f, "namespace length {actual} is below minimum {min}")
            }
            Self::NamespaceTooLong { max, actual } => {
                write!(f, "namespace length {actual} exceeds maximum {max}")
            }
            Self::NamespaceChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position}; namespace allows lowercase letters, digits, and hyphens"
                )
            }
            Self::ReferenceTooShort => write!(f, "reference cannot be empty"),
            Self::ReferenceTooLong { max, actual } => {
                write!(f, "reference length {actual} exceeds maximum {max}")
            }
            Self::ReferenceChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position}; reference allows letters, digits, and hyphens"
                )
            }
        }
    }
}

impl std::error::Error for ChainIdError {}
