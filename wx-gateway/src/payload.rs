//! Response body decoding.

use serde_json::Value;
use wx_data::FetchError;

/// Decode a JSON body, unwrapping one extra layer of string encoding.
///
/// Some stored files come back serialized twice (`"\"{...}\""`). A body that
/// decodes to a string is decoded again; if that fails, or the result is
/// still a string, the payload is reported as corrupt.
pub fn decode_payload(body: &str) -> Result<Value, FetchError> {
    let first: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::corrupt(format!("body is not JSON: {e}")))?;

    let Value::String(inner) = first else {
        return Ok(first);
    };

    let second: Value = serde_json::from_str(&inner)
        .map_err(|e| FetchError::corrupt(format!("string payload is not JSON: {e}")))?;
    if second.is_string() {
        return Err(FetchError::corrupt(
            "payload is still a string after a second decode",
        ));
    }
    Ok(second)
}

/// Message carried in an error body's `detail` field.
///
/// Strings are used as is. A structured detail with a string `message` yields
/// that message; any other structure is rendered as compact JSON. Missing,
/// null or empty details yield `None`.
pub fn error_detail(payload: &Value) -> Option<String> {
    let detail = match payload.get("detail")? {
        Value::Null => return None,
        Value::String(text) => text.clone(),
        Value::Object(fields) => match fields.get("message") {
            Some(Value::String(message)) => message.clone(),
            _ => Value::Object(fields.clone()).to_string(),
        },
        other => other.to_string(),
    };
    if detail.trim().is_empty() {
        None
    } else {
        Some(detail)
    }
}
