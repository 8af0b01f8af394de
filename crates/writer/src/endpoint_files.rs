//! Per-endpoint document files
//!
//! One subdirectory per tag, one `{tagOrdinal}-{docOrdinal}.json` per
//! endpoint. Ordinal assignment happens here, in tag-sorted then insertion
//! order, and the returned index drives the keypoint guide.

use oas_minifier_common::{DocumentMetadata, EndpointDocument, MinifierError, Result};
use oas_minifier_pipeline::Extraction;
use std::fs;
use std::path::Path;

use crate::output::write_json;

/// Guide-facing view of one written endpoint document
#[derive(Debug, Clone)]
pub struct TagIndexEntry {
    pub operation_id: String,
    pub doc_number: usize,
}

/// Guide-facing view of one tag's documents
#[derive(Debug, Clone)]
pub struct TagIndex {
    pub tag_number: usize,
    pub name: String,
    pub description: String,
    pub entries: Vec<TagIndexEntry>,
}

/// Write one JSON document per endpoint under `output_dir`, returning the
/// per-tag index in written order.
pub fn write_endpoint_files(output_dir: &Path, extraction: &Extraction) -> Result<Vec<TagIndex>> {
    let mut index = Vec::new();

    for (tag_number, group) in extraction.tags.iter().enumerate() {
        let tag_dir = output_dir.join(&group.name);
        fs::create_dir_all(&tag_dir).map_err(|e| {
            MinifierError::Write(format!(
                "Failed to create tag directory {}: {}",
                tag_dir.display(),
                e
            ))
        })?;

        let mut entries = Vec::new();
        for (doc_number, endpoint) in group.endpoints.iter().enumerate() {
            let document = EndpointDocument {
                metadata: DocumentMetadata {
                    tag: group.name.clone(),
                    tag_number,
                    doc_number,
                    operation_id: endpoint.operation_id.clone(),
                    doc_url: endpoint.doc_url.clone(),
                    server_url: endpoint.server_url.clone(),
                },
                context: endpoint.context.clone(),
            };
            let file_path = tag_dir.join(format!("{tag_number}-{doc_number}.json"));
            write_json(&file_path, &document)?;
            entries.push(TagIndexEntry {
                operation_id: endpoint.operation_id.clone(),
                doc_number,
            });
        }

        index.push(TagIndex {
            tag_number,
            name: group.name.clone(),
            description: group.description.clone(),
            entries,
        });
    }

    Ok(index)
}
