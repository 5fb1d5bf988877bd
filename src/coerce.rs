//! Loose coercion of untrusted JSON values into protocol primitives.
//!
//! Hosts and persisted documents hand us arbitrary JSON. Everything that ends
//! up in a component or in page state goes through these helpers first, so a
//! malformed value is normalized instead of rejected.

use serde_json::Value;

/// Render a JSON value as a display string.
///
/// - `null` becomes `""`
/// - strings are returned as-is (no trimming)
/// - booleans and numbers use their JSON spelling
/// - arrays and objects are rendered as compact JSON text
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Same as [`stringify`] but for an optional lookup result (missing → `""`).
pub fn stringify_opt(value: Option<&Value>) -> String {
    value.map(stringify).unwrap_or_default()
}

/// Truthiness of a JSON value.
///
/// `null`, `false`, `0`, `""`, `[]` and `{}` are false; everything else is true.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Same as [`truthy`] but for an optional lookup result (missing → `false`).
pub fn truthy_opt(value: Option<&Value>) -> bool {
    value.is_some_and(truthy)
}

/// Trim surrounding whitespace into an owned string.
pub fn trimmed(s: impl AsRef<str>) -> String {
    s.as_ref().trim().to_string()
}
