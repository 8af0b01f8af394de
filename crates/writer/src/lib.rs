//! Artifact writing for minified endpoint documents
//!
//! This crate owns the output-directory lifecycle, the per-endpoint and
//! chunked document writers, the keypoint guide, and the token report over
//! a finished output tree. Library code never prints; diagnostics come back
//! as data for the CLI to render.

mod chunks;
mod endpoint_files;
mod guide;
mod output;
mod report;

pub use chunks::{
    distribute_endpoints, write_chunk_files, ChunkEntry, ChunkIndex, TruncationNotice,
};
pub use endpoint_files::{write_endpoint_files, TagIndex, TagIndexEntry};
pub use guide::{write_chunk_guide, write_keypoint_guide, GUIDE_FILE_NAME};
pub use output::prepare_output_dir;
pub use report::{directory_token_report, TokenReport};
