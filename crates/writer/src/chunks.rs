//! Token-budgeted chunk distribution
//!
//! Groups a tag's endpoints into documents whose serialized token count
//! stays under a goal. A single greedy left-to-right pass builds the
//! partition; when it leaves a chunk under 75% of the goal, the goal is
//! raised by that chunk's weight spread over the remaining chunks and the
//! partition is recomputed, up to a fixed recursion depth.

use oas_minifier_common::{
    ChunkDocument, ChunkMetadata, MinifierError, MinifyConfig, Result, TokenCounter,
};
use oas_minifier_pipeline::{render_text, Extraction};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

use crate::output::write_json;

/// Rebalance recursion bound
const MAX_REDISTRIBUTION_DEPTH: usize = 4;

/// Fraction of the goal below which a chunk triggers rebalancing
const REBALANCE_THRESHOLD: f64 = 0.75;

/// Emitted when an oversize endpoint is replaced by a truncation stub
#[derive(Debug, Clone)]
pub struct TruncationNotice {
    pub operation_id: String,
    pub token_count: usize,
}

/// Guide-facing view of one chunk
#[derive(Debug, Clone)]
pub struct ChunkEntry {
    pub doc_number: usize,
    pub operation_ids: Vec<String>,
}

/// Guide-facing view of one tag's chunks
#[derive(Debug, Clone)]
pub struct ChunkIndex {
    pub tag_number: usize,
    pub name: String,
    pub description: String,
    pub chunks: Vec<ChunkEntry>,
}

/// Partition `endpoints` into chunks whose aggregate serialized token count
/// stays under the configured goal.
///
/// An endpoint whose own serialized form exceeds `token_count_max` is
/// replaced in place by a truncation stub before placement; the
/// substitution is permanent for that record.
pub fn distribute_endpoints(
    endpoints: &mut Vec<Value>,
    tag: &str,
    config: &MinifyConfig,
    counter: &dyn TokenCounter,
    notices: &mut Vec<TruncationNotice>,
) -> Vec<Vec<Value>> {
    distribute_at_depth(
        endpoints,
        tag,
        config.token_count_goal as f64,
        0,
        config,
        counter,
        notices,
    )
}

fn distribute_at_depth(
    endpoints: &mut Vec<Value>,
    tag: &str,
    goal: f64,
    depth: usize,
    config: &MinifyConfig,
    counter: &dyn TokenCounter,
    notices: &mut Vec<TruncationNotice>,
) -> Vec<Vec<Value>> {
    let mut chunks: Vec<Vec<Value>> = Vec::new();
    let mut current: Vec<Value> = Vec::new();
    let mut current_tokens = 0usize;

    for index in 0..endpoints.len() {
        let mut endpoint_tokens = counter.count(&render_text(&endpoints[index]));
        if endpoint_tokens > config.token_count_max {
            notices.push(TruncationNotice {
                operation_id: string_field(&endpoints[index], "opid"),
                token_count: endpoint_tokens,
            });
            endpoints[index] = truncation_stub(&endpoints[index], tag, config);
            endpoint_tokens = counter.count(&render_text(&endpoints[index]));
        }
        let endpoint = endpoints[index].clone();

        if goal > (current_tokens + endpoint_tokens) as f64 {
            current.push(endpoint);
            current_tokens += endpoint_tokens;
            continue;
        }
        if current.is_empty() {
            // A single endpoint at or above the goal forms its own chunk.
            chunks.push(vec![endpoint]);
            current_tokens = 0;
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push(endpoint);
            current_tokens = endpoint_tokens;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    if depth >= MAX_REDISTRIBUTION_DEPTH || chunks.len() < 2 {
        return chunks;
    }

    for chunk in &chunks {
        let chunk_tokens: usize = chunk
            .iter()
            .map(|endpoint| counter.count(&render_text(endpoint)))
            .sum();
        if (chunk_tokens as f64) < goal * REBALANCE_THRESHOLD {
            if goal > config.token_count_max as f64 {
                return chunks;
            }
            // Spread the undersized chunk's weight across the other chunks
            // and recompute against the raised goal.
            let raised = goal + chunk_tokens as f64 / (chunks.len() - 1) as f64;
            return distribute_at_depth(endpoints, tag, raised, depth + 1, config, counter, notices);
        }
    }

    chunks
}

/// Stub left in place of an endpoint too large for any chunk. Keeps just
/// enough to route the reader to the full external documentation.
fn truncation_stub(endpoint: &Value, tag: &str, config: &MinifyConfig) -> Value {
    let operation_id = string_field(endpoint, "opid");
    let message = format!(
        "endpoint spec too long see {} for more info",
        config.api_url(tag, &operation_id)
    );
    json!({
        "path": string_field(endpoint, "path"),
        "opid": operation_id,
        "sum": string_field(endpoint, "sum"),
        "message": message,
    })
}

fn string_field(endpoint: &Value, key: &str) -> String {
    endpoint
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Write token-budgeted chunk documents under `output_dir/balanced_chunks`.
pub fn write_chunk_files(
    output_dir: &Path,
    extraction: &Extraction,
    config: &MinifyConfig,
    counter: &dyn TokenCounter,
) -> Result<(Vec<ChunkIndex>, Vec<TruncationNotice>)> {
    let chunks_dir = output_dir.join("balanced_chunks");
    fs::create_dir_all(&chunks_dir).map_err(|e| {
        MinifierError::Write(format!(
            "Failed to create chunks directory {}: {}",
            chunks_dir.display(),
            e
        ))
    })?;

    let mut index = Vec::new();
    let mut notices = Vec::new();

    for (tag_number, group) in extraction.tags.iter().enumerate() {
        let mut endpoints: Vec<Value> = group
            .endpoints
            .iter()
            .map(|endpoint| endpoint.minified.clone())
            .collect();
        let partitions =
            distribute_endpoints(&mut endpoints, &group.name, config, counter, &mut notices);

        let mut entries = Vec::new();
        for (doc_number, chunk) in partitions.iter().enumerate() {
            let mut doc_context = String::new();
            let mut operation_ids = Vec::new();
            for endpoint in chunk {
                doc_context.push_str(&render_text(endpoint));
                doc_context.push('\n');
                operation_ids.push(string_field(endpoint, "opid"));
            }
            let token_count = counter.count(&doc_context);

            let document = ChunkDocument {
                metadata: ChunkMetadata {
                    tag: group.name.clone(),
                    tag_number,
                    doc_number,
                    doc_url: config.api_url(&group.name, ""),
                    server_url: extraction.server_url.clone(),
                    token_count,
                },
                doc_context,
            };

            let file_name = format!("{tag_number}-{}-{doc_number}-{token_count}.json", group.name);
            write_json(&chunks_dir.join(file_name), &document)?;
            entries.push(ChunkEntry {
                doc_number,
                operation_ids,
            });
        }

        index.push(ChunkIndex {
            tag_number,
            name: group.name.clone(),
            description: group.description.clone(),
            chunks: entries,
        });
    }

    Ok((index, notices))
}
