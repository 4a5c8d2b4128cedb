//! Kani proof harnesses for the validators that must never panic.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{is_caip_chain_id, ChainId, PackageName, SnapIdPrefix};

/// Characters drawn from both valid and invalid classes for each grammar.
const ALPHABET: &[u8] = b"aZ09-:_/@.!~ ";

/// Generate a bounded string over `ALPHABET`.
fn arbitrary_string<const N: usize>() -> String {
    let len: usize = kani::any();
    kani::assume(len <= N);

    let mut s = String::with_capacity(len);
    for _ in 0..len {
        let idx: usize = kani::any();
        s.push(ALPHABET[idx % ALPHABET.len()] as char);
    }
    s
}

#[kani::proof]
#[kani::unwind(12)]
fn chain_id_predicate_never_panics() {
    let s = arbitrary_string::<10>();
    let valid = is_caip_chain_id(s.as_str());
    assert_eq!(valid, ChainId::parse(&s).is_ok());
}

#[kani::proof]
#[kani::unwind(12)]
fn parsed_chain_id_round_trips() {
    let s = arbitrary_string::<10>();
    if let Ok(chain) = ChainId::parse(&s) {
        assert_eq!(chain.to_string(), s);
    }
}

#[kani::proof]
#[kani::unwind(10)]
fn prefix_detection_never_panics() {
    let s = arbitrary_string::<8>();
    if let Some(prefix) = SnapIdPrefix::detect(&s) {
        assert!(prefix.matches(&s));
    }
}

#[kani::proof]
#[kani::unwind(8)]
fn package_name_never_panics() {
    let s = arbitrary_string::<6>();
    if let Ok(name) = PackageName::parse(&s) {
        assert_eq!(name.as_str(), s);
    }
}
