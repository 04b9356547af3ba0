//! Canonical JSON serialization
//!
//! The canonical form is the deterministic textual representation used both
//! as the signing input and as the payload for reversible encoding of nested
//! values. Two data-equal values always canonicalize to the same bytes.

use crate::error::CanonicalError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Write as FmtWrite;

/// Produce the canonical form of any serializable value.
///
/// # Rules
///
/// - Object keys sorted ascending by UTF-8 bytes
/// - Arrays preserve element order
/// - No whitespace anywhere
/// - `null`, `true`, `false` as bare literals
/// - Numbers in their shortest round-trip decimal form
/// - Strings quoted, with `"` `\` and control characters escaped
///
/// # Errors
///
/// Returns `CanonicalError::UnrepresentableValue` if a numeric value is not
/// finite.
///
/// # Example
///
/// ```rust
/// use sealbox_canonical::canonicalize;
///
/// let value = serde_json::json!({"z": 1, "a": 2});
/// assert_eq!(canonicalize(&value).unwrap(), r#"{"a":2,"z":1}"#);
/// ```
pub fn canonicalize<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    let json_value = serde_json::to_value(value)?;
    canonicalize_value(&json_value)
}

/// Produce the canonical form of a `serde_json::Value`.
pub fn canonicalize_value(value: &Value) -> Result<String, CanonicalError> {
    let mut out = String::new();
    write_value(&mut out, value)?;
    Ok(out)
}

/// Canonical form as raw bytes, for hashing.
pub fn canonical_bytes(value: &Value) -> Result<Vec<u8>, CanonicalError> {
    canonicalize_value(value).map(String::into_bytes)
}

fn write_value(out: &mut String, value: &Value) -> Result<(), CanonicalError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => {
            // Non-finite floats have no canonical literal form. serde_json
            // refuses to construct them under default features, but numbers
            // arriving through foreign Serialize impls are checked here.
            if let Some(f) = n.as_f64() {
                if !n.is_i64() && !n.is_u64() && !f.is_finite() {
                    return Err(CanonicalError::UnrepresentableValue(n.to_string()));
                }
            }
            out.push_str(&n.to_string());
        }
        Value::String(s) => write_string(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item)?;
            }
            out.push(']');
        }
        Value::Object(fields) => write_object(out, fields)?,
    }
    Ok(())
}

fn write_object(out: &mut String, fields: &Map<String, Value>) -> Result<(), CanonicalError> {
    // Sort keys by UTF-8 bytes so insertion order never leaks into the output
    let mut keys: Vec<&String> = fields.keys().collect();
    keys.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));

    out.push('{');
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(out, key);
        out.push(':');
        if let Some(value) = fields.get(*key) {
            write_value(out, value)?;
        }
    }
    out.push('}');
    Ok(())
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                write!(out, "\\u{:04x}", c as u32).expect("writing to String cannot fail");
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
