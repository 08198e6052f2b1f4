//! Search index builder for a markdown documentation tree.
//!
//! # Error Handling Strategy
//!
//! Unlike lenient multi-source indexers, a documentation index is all-or-nothing:
//!
//! - **Unreadable files**: The first file that cannot be read (missing permissions,
//!   invalid UTF-8) aborts the build with an error naming that file. No partial index
//!   is produced, so a stale but complete index on disk is never replaced by a short one.
//! - **Missing metadata**: Not an error. The title falls back to the file name.
//! - **Empty documents**: Files whose body cleans to nothing are skipped and counted
//!   in the debug log.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::IndexConfig;
use crate::indexer::discovery::discover_documents;
use crate::models::DocumentRecord;
use crate::parsers::{Frontmatter, clean_markdown, extract_frontmatter};
use crate::utils::{document_url, relative_url_path, title_from_file_name, truncate_chars};

/// Build the search index for every markdown document under `config.docs_dir`
///
/// Records are returned in discovery order (file-name order, depth first).
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid (see [`IndexConfig::validate`])
/// - Any markdown file cannot be read or is not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use docs_search_index::{IndexConfig, build_index};
///
/// let config = IndexConfig::new("docs").with_base_url("/my-project");
/// let index = build_index(&config)?;
/// println!("Indexed {} documents", index.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_index(config: &IndexConfig) -> Result<Vec<DocumentRecord>> {
    config.validate()?;

    let files = discover_documents(config)?;
    let mut index = Vec::with_capacity(files.len());
    let mut skipped_empty = 0;

    for path in &files {
        match build_record(config, path)? {
            Some(record) => {
                debug!("Indexed {} as {}", path.display(), record.url);
                index.push(record);
            }
            None => {
                skipped_empty += 1;
                debug!("Skipping {}: no text left after cleaning", path.display());
            }
        }
    }

    info!(
        "Indexed {} documents ({} markdown files found, {} empty)",
        index.len(),
        files.len(),
        skipped_empty
    );

    Ok(index)
}

/// Read one markdown file and turn it into a record
///
/// Returns `Ok(None)` when the cleaned body is empty.
pub fn build_record(config: &IndexConfig, path: &Path) -> Result<Option<DocumentRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
    record_from_markdown(config, path, &text)
}

/// Turn already-loaded markdown text into a record
///
/// `path` must lie under `config.docs_dir`; it supplies the URL and the fallback title.
pub fn record_from_markdown(
    config: &IndexConfig,
    path: &Path,
    text: &str,
) -> Result<Option<DocumentRecord>> {
    let Frontmatter { title, body } = extract_frontmatter(text);

    let content = clean_markdown(body);
    if content.is_empty() {
        return Ok(None);
    }

    let title = title.unwrap_or_else(|| title_from_file_name(path));
    let url = document_url(&config.base_url, &relative_url_path(&config.docs_dir, path)?);
    let content = truncate_chars(&content, config.max_content_chars).to_string();

    Ok(Some(DocumentRecord { title, url, content }))
}
