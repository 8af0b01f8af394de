//! Output document metadata
//!
//! Every written artifact carries an addressing record that the keypoint
//! guide and consuming agents use to locate the full documentation for an
//! endpoint. Metadata is assigned once during the writing pass and is
//! immutable afterwards.

use serde::{Deserialize, Serialize};

/// Addressing record for a per-endpoint document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Owning tag name
    pub tag: String,

    /// Ordinal of the tag in tag-sorted order
    pub tag_number: usize,

    /// Ordinal of the document within its tag
    pub doc_number: usize,

    /// Lower-cased operation id
    pub operation_id: String,

    /// Externally resolvable documentation URL
    pub doc_url: String,

    /// Server URL joined with the endpoint path
    pub server_url: String,
}

/// One per-endpoint JSON artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointDocument {
    pub metadata: DocumentMetadata,

    /// Line-oriented serialized endpoint
    pub context: String,
}

/// Addressing record for a chunk document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Owning tag name
    pub tag: String,

    /// Ordinal of the tag in tag-sorted order
    pub tag_number: usize,

    /// Ordinal of the chunk within its tag
    pub doc_number: usize,

    /// Externally resolvable documentation URL for the tag
    pub doc_url: String,

    /// Server URL from the spec
    pub server_url: String,

    /// Aggregate token count of the chunk's context
    pub token_count: usize,
}

/// One chunk JSON artifact, holding several serialized endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkDocument {
    pub metadata: ChunkMetadata,

    /// Concatenated serialized endpoints, one per line group
    pub doc_context: String,
}
