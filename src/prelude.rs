//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use snap_id::prelude::*;
//!
//! let id = SnapId::parse("npm:foo").unwrap();
//! assert_eq!(id.prefix(), SnapIdPrefix::Npm);
//! ```
//!
//! The URI building blocks (`Authority`, `Host`, `UriPath`, `UriShape`) are
//! left out; import them from the crate root when needed.

pub use crate::{
    // Core types
    Candidate, ChainId, HttpSnapId, LocalSnapId, NpmRegistry, NpmSnapId, PackageName, SnapId,
    SnapIdPrefix,
    // Validators
    is_caip_chain_id, validate_snap_id,
    // Configuration
    HostRestriction, PathPolicy, UriShapeConfig,
    // Errors
    ChainIdError, HostError, NpmIdError, PackageNameError, PathError, SnapIdError, UriError,
    // Constants
    DEFAULT_NPM_REGISTRY, HTTP_PREFIX, LOCAL_PREFIX, NPM_PREFIX,
};
