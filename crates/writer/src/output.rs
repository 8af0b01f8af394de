//! Output directory lifecycle

use oas_minifier_common::{MinifierError, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Delete and recreate the output directory. A run is an all-or-nothing
/// batch transform; there is no incremental mode.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|e| {
            MinifierError::Write(format!(
                "Failed to clear output directory {}: {}",
                dir.display(),
                e
            ))
        })?;
    }
    fs::create_dir_all(dir).map_err(|e| {
        MinifierError::Write(format!(
            "Failed to create output directory {}: {}",
            dir.display(),
            e
        ))
    })?;
    Ok(())
}

pub(crate) fn write_json<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let rendered = serde_json::to_string(document)?;
    fs::write(path, rendered)
        .map_err(|e| MinifierError::Write(format!("Failed to write {}: {}", path.display(), e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepare_wipes_stale_contents() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("docs");
        fs::create_dir_all(output.join("old_tag")).unwrap();
        fs::write(output.join("old_tag/0-0.json"), "{}").unwrap();

        prepare_output_dir(&output).unwrap();

        assert!(output.exists());
        assert!(!output.join("old_tag").exists());
    }
}
