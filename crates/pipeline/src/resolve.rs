//! `$ref` expansion
//!
//! Replaces every `$ref` pointer in a subtree with the object it designates,
//! keyed under the final segment of the reference path. References nest:
//! the designated object is itself resolved before it is inlined. A
//! reference whose path is absent from the document resolves to an empty
//! mapping rather than failing.

use oas_minifier_common::{MinifierError, Result};
use serde_json::{Map, Value};

/// Resolve every `$ref` in `node` against `spec`, returning a new subtree.
///
/// Cyclic reference chains are reported as
/// [`MinifierError::CyclicReference`] instead of recursing without bound.
pub fn resolve_refs(spec: &Value, node: &Value) -> Result<Value> {
    resolve_node(spec, node, &mut Vec::new())
}

fn resolve_node(spec: &Value, node: &Value, visiting: &mut Vec<String>) -> Result<Value> {
    match node {
        Value::Object(map) => {
            let mut resolved = Map::new();
            for (key, value) in map {
                let ref_path = match (key.as_str(), value.as_str()) {
                    ("$ref", Some(path)) => path,
                    _ => {
                        resolved.insert(key.clone(), resolve_node(spec, value, visiting)?);
                        continue;
                    }
                };
                if visiting.iter().any(|seen| seen == ref_path) {
                    return Err(MinifierError::CyclicReference(ref_path.to_string()));
                }
                let target = lookup(spec, ref_path);
                visiting.push(ref_path.to_string());
                let inlined = resolve_node(spec, &target, visiting)?;
                visiting.pop();
                let inline_key = ref_path.rsplit('/').next().unwrap_or(ref_path);
                resolved.insert(inline_key.to_string(), inlined);
            }
            Ok(Value::Object(resolved))
        }
        Value::Array(items) => {
            let resolved = items
                .iter()
                .map(|item| resolve_node(spec, item, visiting))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(resolved))
        }
        scalar => Ok(scalar.clone()),
    }
}

/// Walk the reference path through the document, segment by segment. Any
/// missing segment yields an empty mapping (soft miss).
fn lookup(spec: &Value, ref_path: &str) -> Value {
    let mut current = spec;
    for segment in ref_path.split('/').skip(1) {
        match current.get(segment) {
            Some(next) => current = next,
            None => return Value::Object(Map::new()),
        }
    }
    current.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ref_free_subtree_is_unchanged() {
        let spec = json!({"components": {"schemas": {}}});
        let endpoint = json!({
            "operationId": "listWidgets",
            "parameters": [{"name": "limit", "schema": {"type": "integer"}}],
            "responses": {"200": {"description": "ok"}}
        });
        assert_eq!(resolve_refs(&spec, &endpoint).unwrap(), endpoint);
    }

    #[test]
    fn test_inlines_ref_under_final_segment() {
        let spec = json!({
            "components": {
                "schemas": {
                    "Widget": {"type": "object", "properties": {"id": {"type": "string"}}}
                }
            }
        });
        let endpoint = json!({"schema": {"$ref": "#/components/schemas/Widget"}});
        let resolved = resolve_refs(&spec, &endpoint).unwrap();
        assert_eq!(
            resolved,
            json!({
                "schema": {
                    "Widget": {"type": "object", "properties": {"id": {"type": "string"}}}
                }
            })
        );
    }

    #[test]
    fn test_resolves_refs_transitively() {
        let spec = json!({
            "components": {
                "schemas": {
                    "Widget": {"part": {"$ref": "#/components/schemas/Part"}},
                    "Part": {"type": "string"}
                }
            }
        });
        let endpoint = json!({"$ref": "#/components/schemas/Widget"});
        let resolved = resolve_refs(&spec, &endpoint).unwrap();
        assert_eq!(resolved, json!({"Widget": {"part": {"Part": {"type": "string"}}}}));
    }

    #[test]
    fn test_resolves_refs_inside_sequences() {
        let spec = json!({
            "components": {"parameters": {"Limit": {"name": "limit", "in": "query"}}}
        });
        let endpoint = json!({"parameters": [{"$ref": "#/components/parameters/Limit"}]});
        let resolved = resolve_refs(&spec, &endpoint).unwrap();
        assert_eq!(
            resolved,
            json!({"parameters": [{"Limit": {"name": "limit", "in": "query"}}]})
        );
    }

    #[test]
    fn test_missing_ref_resolves_to_empty_mapping() {
        let spec = json!({"components": {"schemas": {}}});
        let endpoint = json!({"schema": {"$ref": "#/components/schemas/Nope"}});
        let resolved = resolve_refs(&spec, &endpoint).unwrap();
        assert_eq!(resolved, json!({"schema": {"Nope": {}}}));
    }

    #[test]
    fn test_cyclic_ref_is_an_error() {
        let spec = json!({
            "components": {
                "schemas": {
                    "A": {"next": {"$ref": "#/components/schemas/B"}},
                    "B": {"next": {"$ref": "#/components/schemas/A"}}
                }
            }
        });
        let endpoint = json!({"$ref": "#/components/schemas/A"});
        let result = resolve_refs(&spec, &endpoint);
        assert!(matches!(result, Err(MinifierError::CyclicReference(_))));
    }
}
