//! Wrapper-nesting collapse
//!
//! Schema composition leaves chains of single-key mappings
//! (`content` → `application/json` → `schema` → `{...}`); collapsing them
//! removes depth without losing information. HTTP-status-like keys stay as
//! explicit nesting boundaries so response branching survives.

use serde_json::{Map, Value};

/// Keys never collapsed, regardless of cardinality.
fn is_protected(key: &str) -> bool {
    matches!(key, "responses" | "default" | "200") || key.starts_with('4') || key.starts_with('5')
}

/// Collapse single-key wrapper mappings below `value`.
pub fn flatten_endpoint(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(flatten_entries(map)),
        Value::Array(items) => Value::Array(items.iter().map(flatten_endpoint).collect()),
        scalar => scalar.clone(),
    }
}

fn flatten_entries(map: &Map<String, Value>) -> Map<String, Value> {
    let mut flattened = Map::new();
    for (key, value) in map {
        if !value.is_object() {
            flattened.insert(key.clone(), flatten_endpoint(value));
            continue;
        }
        if is_protected(key) {
            flattened.insert(key.clone(), flatten_endpoint(value));
            continue;
        }

        let mut key = key.clone();
        let mut value = value.clone();
        // Unwrap single-key wrappers until a boundary key or a wider mapping.
        while !is_protected(&key) {
            let inner = match &value {
                Value::Object(inner) if inner.len() == 1 => inner
                    .iter()
                    .next()
                    .map(|(inner_key, inner_value)| (inner_key.clone(), inner_value.clone())),
                _ => None,
            };
            match inner {
                Some((inner_key, inner_value)) => {
                    key = inner_key;
                    value = inner_value;
                }
                None => break,
            }
        }
        flattened.insert(key, flatten_endpoint(&value));
    }
    flattened
}
