//! Query-string serialisation for GET payloads.
//!
//! Follows the bracket convention browsers' form libraries use:
//! `{"a": {"b": 1}}` becomes `a[b]=1`, `{"tags": ["x", "y"]}` becomes
//! `tags[]=x&tags[]=y`, and null becomes an empty value.

use serde_json::Value;

/// Flatten a JSON payload into ordered `(key, value)` pairs.
///
/// Objects contribute one entry per leaf. A top-level array is read as a list
/// of `{"name": .., "value": ..}` form fields. Other top-level scalars produce
/// nothing.
pub fn to_query_pairs(value: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                build(key, val, &mut pairs);
            }
        }
        Value::Array(fields) => {
            for field in fields {
                if let Some(name) = field.get("name").and_then(Value::as_str) {
                    let val = field.get("value").unwrap_or(&Value::Null);
                    pairs.push((name.to_string(), scalar(val)));
                }
            }
        }
        _ => {}
    }
    pairs
}

fn build(prefix: &str, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::Object(_) | Value::Array(_) => {
                        build(&format!("{prefix}[{i}]"), item, pairs);
                    }
                    _ => pairs.push((format!("{prefix}[]"), scalar(item))),
                }
            }
        }
        Value::Object(map) => {
            for (key, val) in map {
                build(&format!("{prefix}[{key}]"), val, pairs);
            }
        }
        _ => pairs.push((prefix.to_string(), scalar(value))),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        // Nested containers only reach here through form-field arrays.
        other => other.to_string(),
    }
}
