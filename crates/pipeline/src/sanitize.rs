//! Null/empty and excluded-key stripping
//!
//! Both passes are pure recursive filters returning new values. Removal is a
//! child-filtering operation, never a restructuring one, so a single pass is
//! complete and a second pass is a no-op.

use oas_minifier_common::KeysToKeep;
use serde_json::Value;

/// Remove null and empty-string values, then strip the configured key
/// classes.
pub fn sanitize(value: &Value, keys: &KeysToKeep) -> Value {
    strip_excluded(&remove_empty(value), keys)
}

/// Drop mapping entries whose value is `null` or the empty string.
pub fn remove_empty(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, child)| !is_empty(child))
                .map(|(key, child)| (key.clone(), remove_empty(child)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(remove_empty).collect()),
        scalar => scalar.clone(),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Drop `example`, `enum`, and nested `description` entries per the
/// configuration. A `description` at the endpoint root is endpoint
/// documentation and survives; deeper ones are schema noise.
pub fn strip_excluded(value: &Value, keys: &KeysToKeep) -> Value {
    strip_at_depth(value, keys, 0)
}

fn strip_at_depth(value: &Value, keys: &KeysToKeep, depth: usize) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| !is_excluded(key, keys, depth))
                .map(|(key, child)| (key.clone(), strip_at_depth(child, keys, depth + 1)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| strip_at_depth(item, keys, depth + 1))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

fn is_excluded(key: &str, keys: &KeysToKeep, depth: usize) -> bool {
    match key {
        "example" => !keys.examples,
        "enum" => !keys.enums,
        "description" => depth > 0 && !keys.nested_descriptions,
        _ => false,
    }
}
