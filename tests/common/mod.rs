//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Builder for creating test documentation trees
pub struct DocsDirBuilder {
    temp_dir: TempDir,
}

impl DocsDirBuilder {
    /// Create a new builder with an empty docs directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the docs directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file at `relative` (slash-separated), creating parent directories
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let file_path = self.temp_dir.path().join(relative);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(file_path, content).expect("Failed to write file");
        self
    }

    /// Add a markdown page built with [`PageBuilder`]
    pub fn with_page(self, relative: &str, page: PageBuilder) -> Self {
        let content = page.to_markdown();
        self.with_file(relative, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DocsDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for markdown pages with optional frontmatter
pub struct PageBuilder {
    frontmatter: Vec<(String, String)>,
    body: String,
}

impl PageBuilder {
    /// Create a page with a short default body and no frontmatter
    pub fn new() -> Self {
        Self { frontmatter: Vec::new(), body: "Some page text.".to_string() }
    }

    /// Set the `title:` frontmatter field
    pub fn title(self, title: &str) -> Self {
        self.field("title", title)
    }

    /// Add an arbitrary frontmatter field
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.frontmatter.push((key.to_string(), value.to_string()));
        self
    }

    /// Set the markdown body
    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Render as markdown text
    pub fn to_markdown(&self) -> String {
        if self.frontmatter.is_empty() {
            return self.body.clone();
        }

        let fields = self
            .frontmatter
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n");

        format!("---\n{}\n---\n\n{}\n", fields, self.body)
    }
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to create a small documentation site resembling a real project
pub fn realistic_docs_dir() -> TempDir {
    DocsDirBuilder::new()
        .with_file("README.md", "# Docs\n\nThis folder holds the site sources.")
        .with_page(
            "index.md",
            PageBuilder::new().title("Home").field("layout", "default").body(
                "# Welcome\n\nStart with the [quick start](guides/quick-start.md).\n\n![banner](assets/banner.png)",
            ),
        )
        .with_page(
            "guides/index.md",
            PageBuilder::new().title("Guides").body("All guides live here."),
        )
        .with_page(
            "guides/quick-start.md",
            PageBuilder::new().body(
                "## Install\n\n```bash\nnpm install\n```\n\nRun `npm start` and open the **dashboard**.",
            ),
        )
        .with_page(
            "guides/sync_settings.md",
            PageBuilder::new()
                .field("layout", "page")
                .body("<div class=\"tip\">Settings sync every _five_ minutes.</div>"),
        )
        .with_file("guides/README.md", "Index of guides.")
        .with_file("reference/snippets.md", "```yaml\nkey: value\n```\n")
        .with_file("assets/style.css", "body { margin: 0 }")
        .build()
}
