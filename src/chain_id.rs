//! CAIP-2 chain IDs.
//!
//! # Grammar Reference
//!
//! ```abnf
//! chain-id  = namespace ":" reference
//! namespace = 3*8( "-" / %x61-7A / DIGIT )
//! reference = 1*32( "-" / ALPHA / DIGIT )
//! ```

use std::fmt;
use std::str::FromStr;

use crate::candidate::Candidate;
use crate::constants::{
    MAX_CHAIN_NAMESPACE_LENGTH, MAX_CHAIN_REFERENCE_LENGTH, MIN_CHAIN_NAMESPACE_LENGTH,
    MIN_CHAIN_REFERENCE_LENGTH,
};
use crate::error::ChainIdError;

/// A CAIP-2 blockchain ID, e.g. `eip155:1`.
///
/// # Examples
///
/// ```
/// use snap_id::ChainId;
///
/// let chain = ChainId::parse("cosmos:cosmoshub-2").unwrap();
/// assert_eq!(chain.namespace(), "cosmos");
/// assert_eq!(chain.reference(), "cosmoshub-2");
/// assert_eq!(chain.to_string(), "cosmos:cosmoshub-2");
///
/// assert!(ChainId::parse("EIP155:1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainId {
    namespace: String,
    reference: String,
}

impl ChainId {
    /// Parses a chain ID from a string.
    ///
    /// # Errors
    ///
    /// Returns `ChainIdError` if:
    /// - There is no `:` separator
    /// - The namespace is not 3-8 characters of `[-a-z0-9]`
    /// - The reference is not 1-32 characters of `[-a-zA-Z0-9]`
    pub fn parse(input: &str) -> Result<Self, ChainIdError> {
        let Some((namespace, reference)) = input.split_once(':') else {
            return Err(ChainIdError::MissingSeparator);
        };

        for (i, c) in namespace.char_indices() {
            if !Self::is_namespace_char(c) {
                return Err(ChainIdError::NamespaceChar { char: c, position: i });
            }
        }

        if namespace.len() < MIN_CHAIN_NAMESPACE_LENGTH {
            return Err(ChainIdError::NamespaceTooShort {
                min: MIN_CHAIN_NAMESPACE_LENGTH,
                actual: namespace.len(),
            });
        }

        if namespace.len() > MAX_CHAIN_NAMESPACE_LENGTH {
            return Err(ChainIdError::NamespaceTooLong {
                max: MAX_CHAIN_NAMESPACE_LENGTH,
                actual: namespace.len(),
            });
        }

        let offset = namespace.len() + 1;
        for (i, c) in reference.char_indices() {
            if !Self::is_reference_char(c) {
                return Err(ChainIdError::ReferenceChar {
                    char: c,
                    position: offset + i,
                });
            }
        }

        if reference.len() < MIN_CHAIN_REFERENCE_LENGTH {
            return Err(ChainIdError::ReferenceTooShort);
        }

        if reference.len() > MAX_CHAIN_REFERENCE_LENGTH {
            return Err(ChainIdError::ReferenceTooLong {
                max: MAX_CHAIN_REFERENCE_LENGTH,
                actual: reference.len(),
            });
        }

        Ok(Self {
            namespace: namespace.to_string(),
            reference: reference.to_string(),
        })
    }

    /// Returns the namespace (the chain family, e.g. `eip155`).
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the reference (the chain within its namespace).
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    const fn is_namespace_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
    }

    const fn is_reference_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-'
    }
}

/// Returns true if `value` is a string holding a valid CAIP-2 chain ID.
///
/// Never fails; non-string candidates yield `false`.
///
/// # Examples
///
/// ```
/// use snap_id::{is_caip_chain_id, Candidate};
///
/// assert!(is_caip_chain_id("eip155:1"));
/// assert!(!is_caip_chain_id("eip155"));
/// assert!(!is_caip_chain_id(2_i32));
/// assert!(!is_caip_chain_id(Candidate::Null));
/// ```
#[must_use]
pub fn is_caip_chain_id<'a>(value: impl Into<Candidate<'a>>) -> bool {
    let candidate: Candidate<'a> = value.into();
    candidate
        .as_str()
        .is_some_and(|s| ChainId::parse(s).is_ok())
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.reference)
    }
}

impl FromStr for ChainId {
    type Err = ChainIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ChainId {
    type Error = ChainIdError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
