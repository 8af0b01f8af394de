//! Token statistics over a finished output tree

use oas_minifier_common::{Result, TokenCounter};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Aggregate token counts for the JSON artifacts under a directory
#[derive(Debug, Clone, Default)]
pub struct TokenReport {
    /// Number of artifacts scanned
    pub files: usize,

    /// Smallest context token count
    pub min: usize,

    /// Largest context token count
    pub max: usize,

    /// Sum of all context token counts
    pub total: usize,

    /// File holding the largest context
    pub max_file: Option<PathBuf>,
}

impl TokenReport {
    /// Mean context token count, zero when nothing was scanned
    pub fn average(&self) -> usize {
        if self.files == 0 {
            0
        } else {
            self.total / self.files
        }
    }
}

/// Count the `context`/`doc_context` tokens of every `.json` artifact under
/// `dir`.
pub fn directory_token_report(dir: &Path, counter: &dyn TokenCounter) -> Result<TokenReport> {
    let mut report = TokenReport::default();

    for entry in WalkDir::new(dir).into_iter().filter_map(|entry| entry.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        let contents = fs::read_to_string(entry.path())?;
        let document: Value = serde_json::from_str(&contents)?;
        let context = document
            .get("context")
            .or_else(|| document.get("doc_context"))
            .and_then(Value::as_str)
            .unwrap_or("");
        let tokens = counter.count(context);

        if report.files == 0 || tokens < report.min {
            report.min = tokens;
        }
        if tokens > report.max || report.files == 0 {
            report.max = tokens;
            report.max_file = Some(entry.path().to_path_buf());
        }
        report.files += 1;
        report.total += tokens;
    }

    Ok(report)
}
