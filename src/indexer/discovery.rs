use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::IndexConfig;

const MARKDOWN_EXTENSION: &str = "md";

/// Find every markdown document under the configured docs root
///
/// Walks the tree recursively in file-name order at each level, so two runs over the
/// same tree return the same sequence. Files whose base name is excluded by the config
/// (`README.md` by default) are left out.
///
/// # Errors
///
/// Returns an error if the docs root does not exist or is not a directory.
///
/// Entries that cannot be read while walking (permission denied, broken symlinks) are
/// logged as warnings and skipped.
pub fn discover_documents(config: &IndexConfig) -> Result<Vec<PathBuf>> {
    let root = config.docs_dir.as_path();
    if !root.is_dir() {
        bail!("Documentation directory not found: {}", root.display());
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if !is_markdown_file(&entry) {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if config.is_excluded(&file_name) {
            debug!("Skipping excluded file {}", entry.path().display());
            continue;
        }

        documents.push(entry.into_path());
    }

    Ok(documents)
}

/// Regular file (or symlink to one) with a `.md` extension
fn is_markdown_file(entry: &DirEntry) -> bool {
    if !has_markdown_extension(entry.path()) {
        return false;
    }

    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn has_markdown_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}
