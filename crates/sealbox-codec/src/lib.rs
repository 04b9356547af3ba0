//! # Sealbox Codec
//!
//! Depth-1 reversible encoding for Sealbox records.
//!
//! [`encode`] replaces each top-level value of a record with a base64 token:
//! nested containers are canonicalized first (via `sealbox-canonical`) so
//! their tokens are key-order independent, scalars take their direct textual
//! form. [`decode`] inverts the tokens with best-effort type recovery and a
//! pass-through policy for values that were never valid tokens.
//!
//! This is reversible obfuscation, not encryption: anyone can invert a
//! token without a key.
//!
//! ## Example
//!
//! ```rust
//! use sealbox_codec::{decode, encode};
//! use serde_json::json;
//!
//! let record = json!({"name": "John Doe", "age": 30});
//! let encoded = encode(&record).unwrap();
//! assert_eq!(decode(&encoded).unwrap(), record);
//! ```

mod decode;
mod encode;
mod error;

pub use decode::{decode, decode_field};
pub use encode::{encode, encode_field};
pub use error::CodecError;
