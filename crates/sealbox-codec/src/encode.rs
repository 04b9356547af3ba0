//! Depth-1 record encoding
//!
//! Encoding replaces every top-level value of a record with an opaque base64
//! token. Nested containers are canonicalized first so that the token is
//! independent of key insertion order; scalars take their direct textual
//! form. Nothing below the top level survives as structure.

use crate::error::CodecError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sealbox_canonical::canonicalize_value;
use serde_json::{Map, Value};

/// Encode every top-level value of a record as a base64 token.
///
/// The output object has exactly the same key set as the input; every value
/// is a string in the base64 alphabet. A non-object input degrades to a
/// single token.
///
/// # Errors
///
/// Returns `CodecError::Canonical` if a nested container cannot be
/// canonicalized.
///
/// # Example
///
/// ```rust
/// use sealbox_codec::encode;
/// use serde_json::json;
///
/// let record = json!({"name": "John Doe", "age": 30});
/// let encoded = encode(&record).unwrap();
/// assert_eq!(encoded, json!({"name": "Sm9obiBEb2U=", "age": "MzA="}));
/// ```
pub fn encode(value: &Value) -> Result<Value, CodecError> {
    match value {
        Value::Object(fields) => {
            let mut encoded = Map::with_capacity(fields.len());
            for (key, field) in fields {
                encoded.insert(key.clone(), Value::String(encode_field(field)?));
            }
            Ok(Value::Object(encoded))
        }
        // Not a record: the whole value becomes one token
        other => Ok(Value::String(encode_field(other)?)),
    }
}

/// Encode a single value as a base64 token.
///
/// Containers go through the canonicalizer so the token embeds their full
/// canonical form; scalars are converted to their direct textual form.
pub fn encode_field(value: &Value) -> Result<String, CodecError> {
    let text = match value {
        Value::Object(_) | Value::Array(_) => canonicalize_value(value)?,
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "true".to_owned(),
        Value::Bool(false) => "false".to_owned(),
        Value::Null => "null".to_owned(),
    };
    Ok(BASE64.encode(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn encodes_string_and_integer_fields() {
        let encoded = encode(&json!({"name": "John Doe", "age": 30})).unwrap();
        assert_eq!(encoded, json!({"name": "Sm9obiBEb2U=", "age": "MzA="}));
    }

    #[test]
    fn keeps_the_exact_key_set() {
        let record = json!({"a": 1, "b": [2], "c": {"d": 3}, "e": null});
        let encoded = encode(&record).unwrap();
        let fields = encoded.as_object().unwrap();
        assert_eq!(
            fields.keys().collect::<Vec<_>>(),
            vec!["a", "b", "c", "e"]
        );
        assert!(fields.values().all(Value::is_string));
    }

    #[test]
    fn nested_object_encodes_its_canonical_form() {
        let encoded = encode(&json!({"contact": {"b": 2, "a": 1}})).unwrap();
        let token = encoded["contact"].as_str().unwrap();
        let decoded = BASE64.decode(token).unwrap();
        assert_eq!(decoded, br#"{"a":1,"b":2}"#);
    }

    #[test]
    fn nested_key_order_does_not_change_tokens() {
        let first = encode(&json!({"c": {"x": 1, "y": 2}})).unwrap();
        let second = encode(&json!({"c": {"y": 2, "x": 1}})).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn scalars_use_direct_textual_form() {
        let encoded = encode(&json!({"flag": true, "nothing": null, "pi": 3.5})).unwrap();
        assert_eq!(encoded["flag"], json!(BASE64.encode("true")));
        assert_eq!(encoded["nothing"], json!(BASE64.encode("null")));
        assert_eq!(encoded["pi"], json!(BASE64.encode("3.5")));
    }

    #[test]
    fn non_object_input_degrades_to_single_token() {
        assert_eq!(encode(&json!("hello")).unwrap(), json!("aGVsbG8="));
        assert_eq!(encode(&json!(30)).unwrap(), json!("MzA="));
    }

    #[test]
    fn top_level_array_takes_canonical_path() {
        let encoded = encode(&json!([1, "two", null])).unwrap();
        let decoded = BASE64.decode(encoded.as_str().unwrap()).unwrap();
        assert_eq!(decoded, br#"[1,"two",null]"#);
    }

    #[test]
    fn empty_record_stays_empty() {
        assert_eq!(encode(&json!({})).unwrap(), json!({}));
    }
}
