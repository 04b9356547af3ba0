//! Depth-1 record decoding with best-effort type recovery
//!
//! Decoding inverts the base64 tokens produced by [`encode`](crate::encode)
//! and tries to give each recovered value back its original type: first via
//! the canonical literal grammar (objects, arrays, booleans, null), then by
//! numeric coercion, finally falling back to plain text. Values that are not
//! valid tokens pass through untouched rather than failing the request.

use crate::error::CodecError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::{Map, Value};

/// Decode every top-level token of an encoded record.
///
/// The output object has exactly the same key set as the input. Per-value
/// anomalies never fail the call:
///
/// - non-string values pass through unchanged
/// - strings that are not valid base64 (or decode to non-UTF-8 bytes) pass
///   through unchanged
///
/// A top-level string is treated as a single token. Any other top-level
/// shape is a [`CodecError::StructuralMismatch`].
///
/// Type recovery is best-effort: a string whose content matches a canonical
/// literal (`"true"`, `"null"`, `"30"`) decodes to the literal's type, not
/// back to a string.
///
/// # Example
///
/// ```rust
/// use sealbox_codec::decode;
/// use serde_json::json;
///
/// let encoded = json!({"name": "Sm9obiBEb2U=", "age": "MzA="});
/// let decoded = decode(&encoded).unwrap();
/// assert_eq!(decoded, json!({"name": "John Doe", "age": 30}));
/// ```
pub fn decode(value: &Value) -> Result<Value, CodecError> {
    match value {
        Value::Object(fields) => {
            let mut decoded = Map::with_capacity(fields.len());
            for (key, field) in fields {
                decoded.insert(key.clone(), decode_field(field));
            }
            Ok(Value::Object(decoded))
        }
        Value::String(_) => Ok(decode_field(value)),
        Value::Array(_) => Err(CodecError::StructuralMismatch("an array")),
        Value::Number(_) => Err(CodecError::StructuralMismatch("a number")),
        Value::Bool(_) => Err(CodecError::StructuralMismatch("a boolean")),
        Value::Null => Err(CodecError::StructuralMismatch("null")),
    }
}

/// Decode a single value, passing it through unchanged when it is not a
/// valid token.
pub fn decode_field(value: &Value) -> Value {
    let Value::String(token) = value else {
        return value.clone();
    };
    let Ok(bytes) = BASE64.decode(token) else {
        return value.clone();
    };
    let Ok(text) = String::from_utf8(bytes) else {
        return value.clone();
    };
    recover_type(text)
}

/// Give decoded text back its most specific type.
fn recover_type(text: String) -> Value {
    // Canonical structured literals first: objects, arrays, booleans, null.
    // Plain numbers fall through to coercion so that forms like "030" are
    // still recovered.
    if let Ok(parsed) = serde_json::from_str::<Value>(&text) {
        if matches!(
            parsed,
            Value::Object(_) | Value::Array(_) | Value::Bool(_) | Value::Null
        ) {
            return parsed;
        }
    }

    if text.contains('.') {
        if let Ok(float) = text.parse::<f64>() {
            if let Some(number) = serde_json::Number::from_f64(float) {
                return Value::Number(number);
            }
        }
    } else if let Ok(integer) = text.parse::<i64>() {
        return Value::Number(integer.into());
    }

    Value::String(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_string_and_integer_tokens() {
        let decoded = decode(&json!({"name": "Sm9obiBEb2U=", "age": "MzA="})).unwrap();
        assert_eq!(decoded, json!({"name": "John Doe", "age": 30}));
    }

    #[test]
    fn recovers_nested_structure() {
        let token = BASE64.encode(r#"{"email":"a@b.com"}"#);
        let decoded = decode(&json!({ "contact": token })).unwrap();
        assert_eq!(decoded, json!({"contact": {"email": "a@b.com"}}));
    }

    #[test]
    fn recovers_booleans_and_null_from_literals() {
        let decoded = decode(&json!({
            "flag": BASE64.encode("true"),
            "nothing": BASE64.encode("null"),
        }))
        .unwrap();
        assert_eq!(decoded, json!({"flag": true, "nothing": null}));
    }

    #[test]
    fn coerces_floats_when_text_has_a_decimal_point() {
        let decoded = decode(&json!({ "pi": BASE64.encode("3.5") })).unwrap();
        assert_eq!(decoded, json!({"pi": 3.5}));
    }

    #[test]
    fn leading_zero_integers_still_coerce() {
        // "030" is not valid JSON, but integer coercion accepts it
        let decoded = decode(&json!({ "n": BASE64.encode("030") })).unwrap();
        assert_eq!(decoded, json!({"n": 30}));
    }

    #[test]
    fn invalid_base64_passes_through() {
        let decoded = decode(&json!({"bad": "not base64!!", "ok": "MzA="})).unwrap();
        assert_eq!(decoded, json!({"bad": "not base64!!", "ok": 30}));
    }

    #[test]
    fn non_utf8_payload_passes_through() {
        let token = BASE64.encode([0xff, 0xfe, 0x00, 0x01]);
        let decoded = decode(&json!({ "blob": token.clone() })).unwrap();
        assert_eq!(decoded, json!({ "blob": token }));
    }

    #[test]
    fn non_string_values_pass_through() {
        let decoded = decode(&json!({"n": 7, "b": false, "z": null})).unwrap();
        assert_eq!(decoded, json!({"n": 7, "b": false, "z": null}));
    }

    #[test]
    fn plain_text_that_parses_to_nothing_stays_text() {
        let decoded = decode(&json!({ "word": BASE64.encode("hello") })).unwrap();
        assert_eq!(decoded, json!({"word": "hello"}));
    }

    #[test]
    fn top_level_token_decodes_as_single_scalar() {
        assert_eq!(decode(&json!("MzA=")).unwrap(), json!(30));
    }

    #[test]
    fn top_level_number_is_a_structural_mismatch() {
        let err = decode(&json!(30)).unwrap_err();
        assert!(matches!(err, CodecError::StructuralMismatch(_)));
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn top_level_array_is_a_structural_mismatch() {
        assert!(matches!(
            decode(&json!([1, 2])),
            Err(CodecError::StructuralMismatch(_))
        ));
    }
}
