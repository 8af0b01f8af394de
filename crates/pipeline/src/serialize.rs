//! Flat text rendering
//!
//! Renders a structure into the newline-joined form used for token counting
//! and prompt embedding. Mapping entries become a key line followed by the
//! value (one line for scalars, the recursive rendering for containers);
//! sequence elements are concatenated. Keys and scalar values are stripped
//! of HTML tag spans and of all ASCII punctuation except `/` and `#`, which
//! carry meaning in paths and anchors.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("hard-coded pattern"));

/// Render `data` as newline-joined flat text with no blank lines.
pub fn render_text(data: &Value) -> String {
    let mut parts = Vec::new();
    collect_parts(data, &mut parts);
    let lines: Vec<String> = parts
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .collect();
    lines.join("\n")
}

fn collect_parts(data: &Value, parts: &mut Vec<String>) {
    match data {
        Value::Object(map) => {
            for (key, value) in map {
                parts.push(strip_markup(key));
                match value {
                    Value::Object(_) | Value::Array(_) => collect_parts(value, parts),
                    scalar => parts.push(strip_markup(&scalar_text(scalar))),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_parts(item, parts);
            }
        }
        scalar => parts.push(strip_markup(&scalar_text(scalar))),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Strip HTML tag spans, then every ASCII punctuation character except `/`
/// and `#`, then surrounding whitespace.
fn strip_markup(text: &str) -> String {
    let without_tags = HTML_TAG.replace_all(text, "");
    without_tags
        .chars()
        .filter(|ch| !ch.is_ascii_punctuation() || *ch == '/' || *ch == '#')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_entry_renders_as_key_then_value() {
        let value = json!({"path": "/v1/instances"});
        assert_eq!(render_text(&value), "path\n/v1/instances");
    }

    #[test]
    fn test_nested_mapping_renders_depth_first() {
        let value = json!({"responses": {"200": {"desc": "ok"}}});
        assert_eq!(render_text(&value), "responses\n200\ndesc\nok");
    }

    #[test]
    fn test_sequence_elements_are_concatenated() {
        let value = json!({"params": [{"name": "limit"}, {"name": "offset"}]});
        assert_eq!(render_text(&value), "params\nname\nlimit\nname\noffset");
    }

    #[test]
    fn test_no_blank_lines_in_output() {
        let value = json!({"a": "", "b": {"c": "   "}, "d": "kept"});
        let rendered = render_text(&value);
        assert!(!rendered.is_empty());
        assert!(rendered.lines().all(|line| !line.trim().is_empty()));
    }

    #[test]
    fn test_strips_html_tag_spans() {
        let value = json!({"desc": "the <b>fastest</b> way to <a href=\"x\">list</a> instances"});
        assert_eq!(render_text(&value), "desc\nthe fastest way to list instances");
    }

    #[test]
    fn test_strips_punctuation_except_slash_and_hash() {
        let value = json!({"sum": "create, update & delete /v1/instances#create!"});
        assert_eq!(
            render_text(&value),
            "sum\ncreate update  delete /v1/instances#create"
        );
    }

    #[test]
    fn test_non_string_scalars_are_stringified() {
        let value = json!({"required": true, "maxitems": 10});
        assert_eq!(render_text(&value), "required\ntrue\nmaxitems\n10");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let value = json!({"path": "/v1/x", "responses": {"200": {"desc": "ok"}}});
        assert_eq!(render_text(&value), render_text(&value));
    }
}
