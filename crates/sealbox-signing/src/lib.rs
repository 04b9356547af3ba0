//! # Sealbox Signing
//!
//! Order-independent integrity tagging for Sealbox records.
//!
//! A signature is the HMAC-SHA256 of a value's canonical form (from
//! `sealbox-canonical`), keyed by the process secret and rendered as
//! lowercase hex. Because the canonical form sorts mapping keys at every
//! depth, two data-equal values always carry the same signature no matter
//! how their keys were ordered.
//!
//! The secret is read once at startup ([`Secret::from_env`]) and passed
//! explicitly into [`sign`] and [`verify`]; there is no global key state
//! and no rotation surface.
//!
//! ## Example
//!
//! ```rust
//! use sealbox_signing::{sign, verify, Secret};
//! use serde_json::json;
//!
//! let secret = Secret::new("demo-key");
//! let value = json!({"message": "Hello World", "timestamp": 1616161616});
//!
//! let signature = sign(&value, &secret).unwrap();
//! assert!(verify(&value, &signature, &secret).unwrap());
//! ```

mod error;
mod secret;
mod sign;

pub use error::SigningError;
pub use secret::{Secret, INSECURE_DEFAULT_SECRET, SECRET_ENV_VAR};
pub use sign::{is_well_formed_signature, sign, verify, SIGNATURE_HEX_LEN};
