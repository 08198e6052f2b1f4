//! Search index persistence
//!
//! The index is a single pretty-printed JSON array written into the docs root
//! (`search-index.json` by default) for the client-side search widget to fetch.
//! Each build replaces the file wholesale; nothing is merged with a previous index.

pub mod persistence;

pub use persistence::{load_index, save_index};
