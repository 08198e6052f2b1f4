//! Index builder configuration
//!
//! Everything that used to be a hard-coded constant of the index generator lives here
//! so that callers (the CLI, tests, benches) can point the builder at any tree.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Default documentation root, relative to the working directory
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Default output filename, written inside the documentation root
pub const DEFAULT_OUTPUT_FILENAME: &str = "search-index.json";

/// Default maximum number of characters kept from each document's cleaned text
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 500;

/// Filenames that are treated as directory listings rather than content
pub const DEFAULT_EXCLUDED_FILENAMES: &[&str] = &["README.md"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Root of the markdown tree; URLs are computed relative to it
    pub docs_dir: PathBuf,
    /// Prefix prepended to every generated URL (e.g. `/my-project`)
    pub base_url: String,
    /// Name of the JSON file written inside `docs_dir`
    pub output_filename: String,
    /// Content excerpt length in characters (not bytes)
    pub max_content_chars: usize,
    /// Exact, case-sensitive base names that never produce a record
    pub excluded_filenames: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            base_url: String::new(),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
            excluded_filenames: DEFAULT_EXCLUDED_FILENAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl IndexConfig {
    /// Create a config rooted at `docs_dir` with every other field at its default
    pub fn new(docs_dir: impl Into<PathBuf>) -> Self {
        Self { docs_dir: docs_dir.into(), ..Self::default() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_output_filename(mut self, output_filename: impl Into<String>) -> Self {
        self.output_filename = output_filename.into();
        self
    }

    pub fn with_max_content_chars(mut self, max_content_chars: usize) -> Self {
        self.max_content_chars = max_content_chars;
        self
    }

    pub fn with_excluded_filenames<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_filenames = names.into_iter().map(Into::into).collect();
        self
    }

    /// Full path of the index file
    pub fn output_path(&self) -> PathBuf {
        self.docs_dir.join(&self.output_filename)
    }

    /// Whether a file with this base name is skipped during indexing
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.excluded_filenames.iter().any(|name| name == file_name)
    }

    /// Check that the configuration can produce an index
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `docs_dir` does not exist or is not a directory
    /// - `output_filename` is empty or contains a path separator
    /// - `max_content_chars` is zero
    pub fn validate(&self) -> Result<()> {
        validate_docs_dir(&self.docs_dir)?;

        if self.output_filename.is_empty() {
            bail!("Output filename must not be empty");
        }
        if self.output_filename.contains(['/', '\\']) {
            bail!(
                "Output filename must be a bare file name, not a path: {}",
                self.output_filename
            );
        }
        if self.max_content_chars == 0 {
            bail!("Maximum content length must be at least 1 character");
        }

        Ok(())
    }
}

fn validate_docs_dir(docs_dir: &Path) -> Result<()> {
    if !docs_dir.exists() {
        bail!("Documentation directory not found: {}", docs_dir.display());
    }
    if !docs_dir.is_dir() {
        bail!("Documentation path is not a directory: {}", docs_dir.display());
    }
    Ok(())
}
