//! JSON post-processing passes shared by loading and rendering.
//!
//! Translators emit absent values freely; [`remove_empty`] strips them from
//! the assembled document in one pass. The casing helpers convert property
//! names between the camelCase used internally and the PascalCase used by the
//! service APIs.

use serde_json::{Map, Value};

/// Recursively removes properties whose value is null, an empty string or a
/// non-finite number. Array elements are processed but never removed.
///
/// ```rust
/// use ets2emc_core::json::remove_empty;
/// use serde_json::json;
///
/// let cleaned = remove_empty(json!({ "bitrate": f64::NAN, "codec": "AAC" }));
/// assert_eq!(cleaned, json!({ "codec": "AAC" }));
/// ```
pub fn remove_empty(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !is_empty(v))
                .map(|(k, v)| (k, remove_empty(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(remove_empty).collect()),
        other => other,
    }
}

fn is_empty(value: &Value) -> bool {
    // Non-finite floats are serialized as null by serde_json.
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Upper-cases the first character of every property name, recursively.
pub fn to_pascal_case(value: Value) -> Value {
    recase(value, &[], upper_first)
}

/// Lower-cases the first character of every property name, recursively,
/// leaving the contents of the named properties untouched.
pub fn to_camel_case(value: Value, preserve: &[&str]) -> Value {
    recase(value, preserve, lower_first)
}

fn recase(value: Value, preserve: &[&str], convert: fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, v) in map {
                let new_key = convert(&key);
                let new_value = if preserve.contains(&new_key.as_str()) {
                    v
                } else {
                    recase(v, preserve, convert)
                };
                out.insert(new_key, new_value);
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|v| recase(v, preserve, convert))
                .collect(),
        ),
        other => other,
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
