//! Dot-path traversal and fallback resolution
//!
//! Paths walk JSON objects one key at a time. A missing key or a
//! non-object intermediate node makes the whole path absent.

use serde_json::Value;

/// Resolve a dot-separated path against a JSON value
///
/// Returns `None` when any segment is missing or an intermediate node
/// is not an object. Never partially resolves.
pub fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for part in path.split('.') {
        match current {
            Value::Object(map) => {
                current = map.get(part)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Whether a resolved value counts as present for fallback purposes
///
/// `null`, the empty string and the empty array are treated the same as a
/// missing key.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

/// Resolve the first present value among an ordered list of candidate paths
pub fn first_present<'a>(value: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|path| resolve(value, path))
        .find(|v| is_present(v))
}

/// Render a scalar as a string; objects, arrays and absent values yield `None`
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Render one element of a multi-valued field, keeping empty strings
///
/// Objects, arrays and `null` yield `None`.
pub fn element_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        other => scalar_to_string(other),
    }
}

/// First candidate that renders as a non-empty string
///
/// Candidates holding objects or arrays count as absent and the chain moves on.
pub fn first_string(value: &Value, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|path| resolve(value, path))
        .find_map(scalar_to_string)
}
