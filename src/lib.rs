//! Docs Search Index - Build a client-side search index from markdown documentation
//!
//! This library turns a tree of markdown files into the JSON index a static site's
//! search widget loads. It supports:
//!
//! - Discovering `.md` files under a documentation root, skipping `README.md`
//! - Reading an optional `title:` from `---` delimited frontmatter
//! - Stripping markdown and HTML markup down to a plain-text excerpt
//! - Mapping source paths to published `.html` URLs under a base URL
//! - Writing the index as pretty-printed UTF-8 JSON
//!
//! # Example
//!
//! ```no_run
//! use docs_search_index::{IndexConfig, build_index, save_index};
//!
//! let config = IndexConfig::new("docs").with_base_url("/my-project");
//! let index = build_index(&config)?;
//! save_index(&config.output_path(), &index)?;
//! println!("Indexed {} documents", index.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use config::IndexConfig;
pub use index_storage::{load_index, save_index};
pub use indexer::build_index;
pub use models::{DocumentRecord, IndexStats};
pub use parsers::{clean_markdown, extract_frontmatter};
pub use utils::document_url;
