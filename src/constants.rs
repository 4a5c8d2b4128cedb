//! Constants for snap identifier and chain ID validation.

/// Prefix of local snap identifiers.
pub const LOCAL_PREFIX: &str = "local:";

/// Prefix of npm snap identifiers.
pub const NPM_PREFIX: &str = "npm:";

/// Prefix under which http snap identifiers are enumerated.
pub const HTTP_PREFIX: &str = "http:";

/// Registry used when an npm snap ID does not name one.
pub const DEFAULT_NPM_REGISTRY: &str = "https://registry.npmjs.org";

/// Maximum npm package name length, scope included.
pub const MAX_NPM_PACKAGE_NAME_LENGTH: usize = 214;

/// DNS label maximum length.
pub const MAX_DNS_LABEL_LENGTH: usize = 63;

/// DNS domain maximum length.
pub const MAX_DNS_DOMAIN_LENGTH: usize = 253;

/// Minimum CAIP-2 namespace length.
pub const MIN_CHAIN_NAMESPACE_LENGTH: usize = 3;

/// Maximum CAIP-2 namespace length.
pub const MAX_CHAIN_NAMESPACE_LENGTH: usize = 8;

/// Minimum CAIP-2 reference length.
pub const MIN_CHAIN_REFERENCE_LENGTH: usize = 1;

/// Maximum CAIP-2 reference length.
pub const MAX_CHAIN_REFERENCE_LENGTH: usize = 32;
