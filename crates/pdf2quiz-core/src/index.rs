use crate::error::QuizError;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the manifest written next to the banks.
pub const DEFAULT_MANIFEST_NAME: &str = "banks.json";

/// List the `.jsonl` files directly inside `dir`, sorted by name.
pub fn build_manifest(dir: &Path) -> Result<Vec<String>, QuizError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("jsonl") {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Default manifest location for a bank directory.
pub fn default_manifest_path(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_MANIFEST_NAME)
}

/// Scan `dir` and write the manifest as a pretty-printed JSON array.
pub fn write_manifest(dir: &Path, output: &Path) -> Result<Vec<String>, QuizError> {
    let names = build_manifest(dir)?;
    let mut json = serde_json::to_string_pretty(&names)?;
    json.push('\n');
    std::fs::write(output, json)?;
    info!(banks = names.len(), manifest = %output.display(), "manifest written");
    Ok(names)
}
