//! Endpoint extraction and document shrinking
//!
//! This crate transforms a loaded OpenAPI document into compact per-endpoint
//! records sized for language-model consumption. Each record runs through a
//! fixed sequence of stages:
//!
//! 1. reference resolution (`$ref` expansion)
//! 2. field selection
//! 3. sanitization (null/empty and excluded-key stripping)
//! 4. flattening (single-key wrapper collapse)
//! 5. abbreviation (lower-casing plus a substitution table)
//! 6. flat text serialization, reused for token counting
//!
//! Every stage is a pure function over `serde_json::Value`; records are
//! independent and touch no shared mutable state.

mod abbreviate;
mod extract;
mod flatten;
mod resolve;
mod sanitize;
mod select;
mod serialize;

pub use abbreviate::abbreviate;
pub use extract::{extract_endpoints, EndpointRecord, Extraction, TagGroup};
pub use flatten::flatten_endpoint;
pub use resolve::resolve_refs;
pub use sanitize::{remove_empty, sanitize, strip_excluded};
pub use select::select_fields;
pub use serialize::render_text;
