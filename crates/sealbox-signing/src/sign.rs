//! HMAC-SHA256 signing and verification over canonical forms

use crate::error::SigningError;
use crate::secret::Secret;
use hmac::{Hmac, Mac};
use sealbox_canonical::canonicalize_value;
use serde_json::Value;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length of a rendered signature in hex characters.
pub const SIGNATURE_HEX_LEN: usize = 64;

/// Sign a value with the process secret.
///
/// The value is canonicalized first, so the signature depends only on the
/// data: mappings that differ merely in key insertion order, at any depth,
/// produce identical signatures.
///
/// Returns a 64-character lowercase hex string.
///
/// # Errors
///
/// Returns `SigningError::Canonical` if the value cannot be canonicalized.
///
/// # Example
///
/// ```rust
/// use sealbox_signing::{sign, Secret};
///
/// let secret = Secret::new("test-key");
/// let a = sign(&serde_json::json!({"b": 1, "a": 2}), &secret).unwrap();
/// let b = sign(&serde_json::json!({"a": 2, "b": 1}), &secret).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn sign(value: &Value, secret: &Secret) -> Result<String, SigningError> {
    let canonical = canonicalize_value(value)?;
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(canonical.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Verify a signature against a value and the process secret.
///
/// Recomputes the expected signature and compares in constant time. A
/// mismatched signature is a normal `Ok(false)` outcome, never an error;
/// only canonicalization failure is surfaced.
pub fn verify(value: &Value, signature: &str, secret: &Secret) -> Result<bool, SigningError> {
    let expected = sign(value, secret)?;
    Ok(constant_time_compare(&expected, signature))
}

/// Whether a string has the shape of a signature (64 hex characters).
///
/// Shape-checking only; it says nothing about whether the signature is
/// valid for any value.
pub fn is_well_formed_signature(signature: &str) -> bool {
    signature.len() == SIGNATURE_HEX_LEN && signature.chars().all(|c| c.is_ascii_hexdigit())
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
