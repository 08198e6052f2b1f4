//! Data models for the documentation search index.
//!
//! - [`DocumentRecord`] - One indexed page: title, URL and plain-text excerpt
//! - [`IndexStats`] - Summary figures computed over a built or loaded index
//!
//! Records serialize with serde to exactly the `title`, `url`, `content` keys the
//! client-side search widget reads.

pub mod document;
pub mod stats;

pub use document::DocumentRecord;
pub use stats::IndexStats;
