//! Endpoint extraction
//!
//! Walks the spec's `paths` mapping, runs every qualifying operation through
//! the minification stages, and groups the finished records by tag. Tag
//! groups come out sorted by name; records within a group keep the spec's
//! insertion order.

use oas_minifier_common::{MinifierError, MinifyConfig, Result};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::{abbreviate, flatten_endpoint, render_text, resolve_refs, sanitize, select_fields};

/// One minified (path, method) operation. Immutable once extracted.
#[derive(Debug, Clone)]
pub struct EndpointRecord {
    /// Path string as written in the spec
    pub path: String,

    /// Lower-cased operation id ("" when the spec omits one)
    pub operation_id: String,

    /// Minified endpoint structure
    pub minified: Value,

    /// Flat text rendering of `minified`
    pub context: String,

    /// Documentation URL for this operation
    pub doc_url: String,

    /// Server URL joined with the path
    pub server_url: String,
}

/// Records grouped under one tag
#[derive(Debug, Clone)]
pub struct TagGroup {
    pub name: String,

    /// Tag description from the spec's tag declarations ("" when absent)
    pub description: String,

    pub endpoints: Vec<EndpointRecord>,
}

/// Everything extracted from one spec document
#[derive(Debug, Clone)]
pub struct Extraction {
    /// `servers[0].url` from the spec
    pub server_url: String,

    /// Tag groups in tag-sorted order
    pub tags: Vec<TagGroup>,

    /// Number of operations that survived filtering
    pub endpoint_count: usize,
}

/// Extract and minify every qualifying endpoint of `spec`.
///
/// An operation qualifies when its method is configured and it is not a
/// filtered deprecation. An operation with no tags lands under `default`;
/// one with several tags is recorded under each of them.
pub fn extract_endpoints(spec: &Value, config: &MinifyConfig) -> Result<Extraction> {
    let server_url = spec
        .pointer("/servers/0/url")
        .and_then(Value::as_str)
        .ok_or_else(|| MinifierError::Parse("spec is missing servers[0].url".to_string()))?
        .to_string();

    let paths = spec
        .get("paths")
        .and_then(Value::as_object)
        .ok_or_else(|| MinifierError::Parse("spec is missing a paths mapping".to_string()))?;

    let mut descriptions = tag_descriptions(spec);
    let mut groups: BTreeMap<String, Vec<EndpointRecord>> = BTreeMap::new();
    let mut endpoint_count = 0usize;

    for (path, methods) in paths {
        let Some(methods) = methods.as_object() else {
            continue;
        };
        for (method, endpoint) in methods {
            if !config.methods_to_handle.contains(method.as_str()) {
                continue;
            }
            let deprecated = endpoint
                .get("deprecated")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            if deprecated && !config.keys_to_keep.deprecated {
                continue;
            }
            endpoint_count += 1;

            let resolved = if config.keys_to_keep.schemas {
                resolve_refs(spec, endpoint)?
            } else {
                endpoint.clone()
            };

            let selected = select_fields(&resolved, path, &config.keys_to_keep);
            let sanitized = sanitize(&selected, &config.keys_to_keep);
            let flattened = flatten_endpoint(&sanitized);
            let minified = abbreviate(&flattened, &config.key_abbreviations);
            let context = render_text(&minified);

            let operation_id = endpoint
                .get("operationId")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_lowercase();

            for tag in endpoint_tags(endpoint) {
                let doc_url = config.api_url(&tag, &operation_id);
                groups.entry(tag).or_default().push(EndpointRecord {
                    path: path.clone(),
                    operation_id: operation_id.clone(),
                    minified: minified.clone(),
                    context: context.clone(),
                    doc_url,
                    server_url: format!("{server_url}{path}"),
                });
            }
        }
    }

    // Tags discovered only through endpoint membership get empty
    // descriptions.
    let tags = groups
        .into_iter()
        .map(|(name, endpoints)| TagGroup {
            description: descriptions.remove(&name).unwrap_or_default(),
            name,
            endpoints,
        })
        .collect();

    Ok(Extraction {
        server_url,
        tags,
        endpoint_count,
    })
}

/// Harvest `{name, description}` pairs from the spec-level tag list.
fn tag_descriptions(spec: &Value) -> BTreeMap<String, String> {
    let mut descriptions = BTreeMap::new();
    if let Some(tags) = spec.get("tags").and_then(Value::as_array) {
        for tag in tags {
            let name = tag.get("name").and_then(Value::as_str);
            let description = tag.get("description").and_then(Value::as_str);
            if let (Some(name), Some(description)) = (name, description) {
                descriptions.insert(name.to_string(), description.to_lowercase());
            }
        }
    }
    descriptions
}

fn endpoint_tags(endpoint: &Value) -> Vec<String> {
    let tags: Vec<String> = endpoint
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    if tags.is_empty() {
        vec!["default".to_string()]
    } else {
        tags
    }
}
