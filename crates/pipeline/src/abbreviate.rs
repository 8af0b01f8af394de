//! Key and value abbreviation
//!
//! Lower-cases every mapping key and string value, then rewrites both
//! through the substitution table. Values are rewritten too: a literal
//! string "object" becomes "obj" just like a key would. Downstream
//! artifacts are optimized against that dual application.

use serde_json::Value;
use std::collections::HashMap;

/// Rewrite `value` through lower-casing and the abbreviation table.
pub fn abbreviate(value: &Value, table: &HashMap<String, String>) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, child)| (substitute(key, table), abbreviate(child, table)))
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| abbreviate(item, table)).collect())
        }
        Value::String(text) => Value::String(substitute(text, table)),
        scalar => scalar.clone(),
    }
}

fn substitute(text: &str, table: &HashMap<String, String>) -> String {
    let lowered = text.to_lowercase();
    table.get(&lowered).cloned().unwrap_or(lowered)
}
