//! JSON decoding and pretty-printing.
//!
//! Response bodies are treated as opaque JSON documents: decoded into a
//! [`serde_json::Value`] and re-serialized with a fixed indent for display.

use serde::Serialize;
use serde_json::Value;

/// Indentation used for pretty-printed bodies.
pub const INDENT: &[u8] = b"    ";

/// Decodes a raw response body.
///
/// An empty body decodes to `Ok(None)` and is never an error.
pub fn decode_body(body: &[u8]) -> Result<Option<Value>, serde_json::Error> {
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(body).map(Some)
}

/// Serializes a JSON value with 4-space indentation.
///
/// # Examples
///
/// ```
/// use kelpie::formatter::json::format_json_pretty;
/// use serde_json::json;
///
/// let formatted = format_json_pretty(&json!({"name": "vm-1"})).unwrap();
/// assert_eq!(formatted, "{\n    \"name\": \"vm-1\"\n}");
/// ```
pub fn format_json_pretty(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::with_capacity(128);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serializes a JSON value on a single line.
pub fn format_json_compact(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string(value)
}

/// Validates a request body and strips insignificant whitespace.
///
/// Used for request bodies read from files so that malformed JSON is
/// rejected before anything is sent.
pub fn compact_json_bytes(raw: &[u8]) -> Result<Vec<u8>, serde_json::Error> {
    let value: Value = serde_json::from_slice(raw)?;
    serde_json::to_vec(&value)
}
