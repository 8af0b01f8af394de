//! Field selection
//!
//! Projects a resolved operation onto the configured field subset. The
//! population order is fixed and observable in the output: path and
//! operation id first, then the optional categories. A category whose flag
//! is off is omitted entirely, never set to an empty value.

use oas_minifier_common::KeysToKeep;
use serde_json::{Map, Value};

/// Project `endpoint` onto the configured fields for `path`.
pub fn select_fields(endpoint: &Value, path: &str, keys: &KeysToKeep) -> Value {
    let mut selected = Map::new();
    selected.insert("path".to_string(), Value::String(path.to_string()));
    selected.insert("operationId".to_string(), field(endpoint, "operationId"));

    if keys.parameters {
        selected.insert("parameters".to_string(), field(endpoint, "parameters"));
    }
    if keys.endpoint_summaries {
        selected.insert("summary".to_string(), field(endpoint, "summary"));
    }
    if keys.endpoint_descriptions {
        selected.insert("description".to_string(), field(endpoint, "description"));
    }
    if keys.request_bodies {
        selected.insert("requestBody".to_string(), field(endpoint, "requestBody"));
    }
    if keys.good_responses || keys.bad_responses {
        selected.insert(
            "responses".to_string(),
            Value::Object(select_responses(endpoint, keys)),
        );
    }

    Value::Object(selected)
}

fn select_responses(endpoint: &Value, keys: &KeysToKeep) -> Map<String, Value> {
    let mut responses = Map::new();
    let Some(all) = endpoint.get("responses").and_then(Value::as_object) else {
        return responses;
    };
    if keys.good_responses {
        if let Some(ok) = all.get("200") {
            responses.insert("200".to_string(), ok.clone());
        }
    }
    if keys.bad_responses {
        for (status, response) in all {
            if status.starts_with('4') || status.starts_with('5') || status.contains("default") {
                responses.insert(status.clone(), response.clone());
            }
        }
    }
    responses
}

fn field(endpoint: &Value, key: &str) -> Value {
    endpoint.get(key).cloned().unwrap_or(Value::Null)
}
