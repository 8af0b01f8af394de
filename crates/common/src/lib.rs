//! Common types and utilities for the OAS minifier
//!
//! This crate contains the shared error type, the per-run configuration,
//! the output document metadata structures, and the token-counting seam
//! used by the pipeline, writer, and CLI crates.

mod config;
mod metadata;
mod tokens;

pub use config::{KeysToKeep, MinifyConfig};
pub use metadata::{ChunkDocument, ChunkMetadata, DocumentMetadata, EndpointDocument};
pub use tokens::{TiktokenCounter, TokenCounter};

use thiserror::Error;

/// Errors that can occur while minifying a spec document
#[derive(Error, Debug)]
pub enum MinifierError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Cyclic reference: {0}")]
    CyclicReference(String),

    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for minifier operations
pub type Result<T> = std::result::Result<T, MinifierError>;
