//! Parsers turning raw markdown files into index-ready text
//!
//! # Error Handling Strategy
//!
//! Nothing in this module can fail. Text that does not look like frontmatter is body,
//! markup the cleaner does not recognise is left as text, and a body that cleans to
//! nothing is returned as an empty string for the builder to skip. I/O errors are
//! raised by the indexer, which owns file access.

pub mod frontmatter;
pub mod markdown;

pub use frontmatter::{Frontmatter, extract_frontmatter};
pub use markdown::clean_markdown;
