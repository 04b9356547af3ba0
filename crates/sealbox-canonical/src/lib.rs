//! # Sealbox Canonical
//!
//! Deterministic JSON serialization for Sealbox.
//!
//! This crate produces the canonical form: a compact textual rendering of a
//! structured value that is byte-for-byte identical for data-equal inputs,
//! regardless of the order object keys were inserted in. The canonical form
//! is consumed by the signer (as hashing input) and by the codec (as the
//! payload for encoding nested values).
//!
//! ## Canonical JSON Rules
//!
//! 1. Object keys sorted lexicographically by UTF-8 bytes
//! 2. Arrays preserve insertion order
//! 3. No whitespace
//! 4. UTF-8 encoding, minimal string escaping
//! 5. Finite numbers only; non-finite floats are rejected
//!
//! ## Example
//!
//! ```rust
//! use sealbox_canonical::canonicalize;
//!
//! let value = serde_json::json!({"b": 1, "a": 2});
//! assert_eq!(canonicalize(&value).unwrap(), r#"{"a":2,"b":1}"#);
//! ```

mod canonical;
mod error;

pub use canonical::*;
pub use error::*;
