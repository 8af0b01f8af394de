//! Per-run configuration
//!
//! Every stage of the pipeline reads the same immutable configuration value,
//! constructed once per run and passed by reference.

use crate::{MinifierError, Result};
use std::collections::{BTreeSet, HashMap};

/// Field categories retained in (or stripped from) minified endpoints
#[derive(Debug, Clone)]
pub struct KeysToKeep {
    /// Keep operation parameter lists
    pub parameters: bool,

    /// Keep 200 responses
    pub good_responses: bool,

    /// Keep 4xx/5xx/default responses
    pub bad_responses: bool,

    /// Keep request body schemas
    pub request_bodies: bool,

    /// Resolve `$ref` pointers into inline schemas
    pub schemas: bool,

    /// Keep endpoint-level descriptions
    pub endpoint_descriptions: bool,

    /// Keep endpoint-level summaries
    pub endpoint_summaries: bool,

    /// Keep `enum` values inside schemas
    pub enums: bool,

    /// Keep descriptions below the endpoint root
    pub nested_descriptions: bool,

    /// Keep `example` values
    pub examples: bool,

    /// Include tag descriptions in the keypoint guide
    pub tag_descriptions: bool,

    /// Include endpoints marked `deprecated`
    pub deprecated: bool,
}

impl Default for KeysToKeep {
    fn default() -> Self {
        Self {
            parameters: true,
            good_responses: true,
            bad_responses: false,
            request_bodies: true,
            schemas: true,
            endpoint_descriptions: true,
            endpoint_summaries: true,
            enums: true,
            nested_descriptions: false,
            examples: false,
            tag_descriptions: false,
            deprecated: false,
        }
    }
}

/// Configuration for one minification run
#[derive(Debug, Clone)]
pub struct MinifyConfig {
    /// Field retention flags
    pub keys_to_keep: KeysToKeep,

    /// HTTP methods extracted from the spec, lower-case
    pub methods_to_handle: BTreeSet<String>,

    /// Target aggregate token count per chunk document
    pub token_count_goal: usize,

    /// Absolute token ceiling before an endpoint is truncated
    pub token_count_max: usize,

    /// Key/value substitution table; keys must be lower-case
    pub key_abbreviations: HashMap<String, String>,

    /// Documentation URL template with `{tag}` and `{operationId}` placeholders
    pub api_url_format: String,

    /// Group endpoints into token-budgeted chunks instead of one file each
    pub balanced_chunks: bool,
}

impl Default for MinifyConfig {
    fn default() -> Self {
        Self {
            keys_to_keep: KeysToKeep::default(),
            methods_to_handle: ["get", "post", "patch", "delete"]
                .into_iter()
                .map(String::from)
                .collect(),
            token_count_goal: 3000,
            token_count_max: 4500,
            key_abbreviations: MinifyConfig::default_abbreviations(),
            api_url_format: "{tag}#operation/{operationId}".to_string(),
            balanced_chunks: false,
        }
    }
}

impl MinifyConfig {
    /// The stock abbreviation table. Saves tokens by rewriting common spec
    /// vocabulary into short forms the consuming model still understands.
    pub fn default_abbreviations() -> HashMap<String, String> {
        [
            ("operationid", "opid"),
            ("parameters", "params"),
            ("requestbody", "reqBody"),
            ("properties", "props"),
            ("schemaname", "schName"),
            ("description", "desc"),
            ("summary", "sum"),
            ("string", "str"),
            ("number", "num"),
            ("object", "obj"),
            ("boolean", "bool"),
            ("array", "arr"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
    }

    /// Render the documentation URL for one operation.
    pub fn api_url(&self, tag: &str, operation_id: &str) -> String {
        self.api_url_format
            .replace("{tag}", tag)
            .replace("{operationId}", operation_id)
    }

    /// Reject configurations the pipeline cannot honor. Abbreviation lookup
    /// happens after lower-casing, so a table key with an upper-case letter
    /// can never match.
    pub fn validate(&self) -> Result<()> {
        for key in self.key_abbreviations.keys() {
            if key.chars().any(|ch| ch.is_uppercase()) {
                return Err(MinifierError::Parse(format!(
                    "abbreviation key must be lower-case: {key}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MinifyConfig::default();
        assert_eq!(config.token_count_goal, 3000);
        assert_eq!(config.token_count_max, 4500);
        assert!(!config.balanced_chunks);
        assert!(config.methods_to_handle.contains("get"));
        assert!(config.methods_to_handle.contains("delete"));
        assert!(!config.methods_to_handle.contains("put"));
        assert_eq!(
            config.key_abbreviations.get("operationid"),
            Some(&"opid".to_string())
        );
    }

    #[test]
    fn test_api_url_substitution() {
        let config = MinifyConfig {
            api_url_format: "https://docs.example.com/{tag}#operation/{operationId}".to_string(),
            ..MinifyConfig::default()
        };
        assert_eq!(
            config.api_url("compute", "listinstances"),
            "https://docs.example.com/compute#operation/listinstances"
        );
    }

    #[test]
    fn test_validate_rejects_uppercase_abbreviation_key() {
        let mut config = MinifyConfig::default();
        config
            .key_abbreviations
            .insert("operationId".to_string(), "opid".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(MinifyConfig::default().validate().is_ok());
    }
}
