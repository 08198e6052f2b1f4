//! Index persistence: JSON load/save with atomic writes

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::DocumentRecord;

/// Sibling path used while writing, renamed over the target once complete
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Load a previously written search index
pub fn load_index(path: &Path) -> Result<Vec<DocumentRecord>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read search index: {}", path.display()))?;
    let records: Vec<DocumentRecord> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse search index: {}", path.display()))?;
    Ok(records)
}

/// Save the index as pretty-printed JSON, replacing any existing file atomically
///
/// Non-ASCII text is written as literal UTF-8.
pub fn save_index(path: &Path, records: &[DocumentRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("Failed to serialize search index")?;

    let temp = temp_path(path);
    fs::write(&temp, json)
        .with_context(|| format!("Failed to write index temp file: {}", temp.display()))?;
    fs::rename(&temp, path)
        .with_context(|| format!("Failed to replace search index: {}", path.display()))?;

    Ok(())
}
