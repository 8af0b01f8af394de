//! Keypoint guide
//!
//! The compact cross-reference artifact a consuming agent reads to pick
//! relevant endpoints before fetching their full documents. The format is a
//! fixed textual protocol; whitespace is significant.

use oas_minifier_common::{MinifierError, MinifyConfig, Result};
use oas_minifier_pipeline::render_text;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::chunks::ChunkIndex;
use crate::endpoint_files::TagIndex;

/// File name of the guide at the output root
pub const GUIDE_FILE_NAME: &str = "LLM_OAS_keypoint_guide_file.txt";

const GUIDE_PREAMBLE: &str = r"dear agent,
the user has a query that can be answered with an openapi spec document
please use this llm parsable index of openapi spec documentation in the format:
{{tag_number}}{{tag}} {{tag_description}}
{{operationId}}{{doc_number}}{{operationId}}{{doc_number}}...
{{tag_number}}{{tag}}
...

each operationId in has an associated doc_number
using this index please return the most relevant operationIds
do so STRICTLY by specifying in the following format
IMPORTANTLY REPLY ONLY with numbers and \n characters:

{{tag_number}}
{{doc_number}}
{{doc_number}}
...
\n
{{tag_number}}
...
thank you agent,
begin

";

/// Render and write the per-endpoint guide. Returns the written text so the
/// caller can report its token count.
pub fn write_keypoint_guide(
    output_dir: &Path,
    index: &[TagIndex],
    config: &MinifyConfig,
) -> Result<String> {
    let mut output = String::from(GUIDE_PREAMBLE);
    let blocks: Vec<String> = index
        .iter()
        .map(|tag| {
            let mut block = tag_header(tag.tag_number, &tag.name, &tag.description, config);
            for entry in &tag.entries {
                block.push_str(&entry.operation_id);
                block.push_str(&entry.doc_number.to_string());
            }
            block
        })
        .collect();
    output.push_str(&blocks.join("\n\n"));
    output.push('\n');

    write_guide(output_dir, &output)?;
    Ok(output)
}

/// Render and write the chunk-mode guide: same protocol, chunk granularity.
/// One line per chunk of `{docNumber}` followed by that chunk's
/// `{operationId}{ordinal}` pairs.
pub fn write_chunk_guide(
    output_dir: &Path,
    index: &[ChunkIndex],
    config: &MinifyConfig,
) -> Result<String> {
    let mut output = String::from(GUIDE_PREAMBLE);
    let blocks: Vec<String> = index
        .iter()
        .map(|tag| {
            let mut block = tag_header(tag.tag_number, &tag.name, &tag.description, config);
            for chunk in &tag.chunks {
                block.push('\n');
                block.push_str(&chunk.doc_number.to_string());
                for (ordinal, operation_id) in chunk.operation_ids.iter().enumerate() {
                    block.push_str(operation_id);
                    block.push_str(&ordinal.to_string());
                }
            }
            block
        })
        .collect();
    output.push_str(&blocks.join("\n\n"));
    output.push('\n');

    write_guide(output_dir, &output)?;
    Ok(output)
}

fn tag_header(tag_number: usize, name: &str, description: &str, config: &MinifyConfig) -> String {
    if config.keys_to_keep.tag_descriptions && !description.is_empty() {
        let description = render_text(&Value::String(description.to_string()));
        format!("{tag_number}{name} {description}")
    } else {
        format!("{tag_number}{name}")
    }
}

fn write_guide(output_dir: &Path, contents: &str) -> Result<()> {
    let path = output_dir.join(GUIDE_FILE_NAME);
    fs::write(&path, contents)
        .map_err(|e| MinifierError::Write(format!("Failed to write {}: {}", path.display(), e)))?;
    Ok(())
}
