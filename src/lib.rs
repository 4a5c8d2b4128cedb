//! Parser and validator for snap identifiers and CAIP-2 chain IDs.
//!
//! # Overview
//!
//! A snap ID names where a snap is fetched from. Three forms exist:
//!
//! ```text
//! local:<http|https>://<loopback-host>[:port][/path]
//! npm:<package-name>
//! npm://[userinfo@]<host>[:port]/<package-name>
//! <http|https>://<host>[:port][/path]
//! ```
//!
//! The prefix is recognized first, then the rest of the input is validated
//! against the rules of that variant. Inputs with a query (`?`) or fragment
//! (`#`) are always rejected.
//!
//! # Quick Start
//!
//! ```rust
//! use snap_id::{validate_snap_id, SnapId, SnapIdPrefix};
//!
//! let id = validate_snap_id("local:http://localhost:8080/").unwrap();
//! assert_eq!(id.prefix(), SnapIdPrefix::Local);
//!
//! let SnapId::Npm(npm) = validate_snap_id("npm:@metamask/example-snap").unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(npm.package().scope(), Some("metamask"));
//!
//! assert!(validate_snap_id("local:http://github.com").is_err());
//! ```
//!
//! Values of unknown runtime type go through [`Candidate`]:
//!
//! ```rust
//! use snap_id::{is_caip_chain_id, validate_snap_id, Candidate, SnapIdError};
//!
//! assert_eq!(validate_snap_id(Candidate::Null), Err(SnapIdError::NotAString));
//! assert!(is_caip_chain_id("eip155:1"));
//! assert!(!is_caip_chain_id(true));
//! ```
//!
//! # Length Constraints
//!
//! | Component | Limit |
//! |-----------|-------|
//! | npm package name | 214 chars |
//! | DNS label | 63 chars |
//! | DNS domain | 253 chars |
//! | CAIP-2 namespace | 3-8 chars |
//! | CAIP-2 reference | 1-32 chars |
//!
//! # Logging
//!
//! Rejections are reported through [`tracing`] at `debug` level from
//! [`validate_snap_id`] and at `trace` level from the variant parsers. No
//! subscriber is installed.
//!
//! # Features
//!
//! - `serde`: string serialization for [`SnapId`], [`ChainId`] and [`PackageName`]
//! - `json`: `Candidate::from(&serde_json::Value)`

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod authority;
mod candidate;
mod chain_id;
mod constants;
mod error;
mod host;
mod http;
#[cfg(kani)]
mod kani_impls;
mod local;
mod npm;
mod package_name;
mod path;
pub mod prelude;
mod snap_id;
mod snap_prefix;
mod uri_shape;

pub use authority::Authority;
pub use candidate::Candidate;
pub use chain_id::{is_caip_chain_id, ChainId};
pub use constants::{
    DEFAULT_NPM_REGISTRY, HTTP_PREFIX, LOCAL_PREFIX, MAX_CHAIN_NAMESPACE_LENGTH,
    MAX_CHAIN_REFERENCE_LENGTH, MAX_DNS_DOMAIN_LENGTH, MAX_DNS_LABEL_LENGTH,
    MAX_NPM_PACKAGE_NAME_LENGTH, MIN_CHAIN_NAMESPACE_LENGTH, MIN_CHAIN_REFERENCE_LENGTH,
    NPM_PREFIX,
};
pub use error::{
    ChainIdError, HostError, NpmIdError, PackageNameError, PathError, SnapIdError, UriError,
};
pub use host::Host;
pub use http::HttpSnapId;
pub use local::LocalSnapId;
pub use npm::{NpmRegistry, NpmSnapId};
pub use package_name::PackageName;
pub use path::UriPath;
pub use snap_id::{validate_snap_id, SnapId};
pub use snap_prefix::SnapIdPrefix;
pub use uri_shape::{HostRestriction, PathPolicy, UriShape, UriShapeConfig};
