//! Index building for a markdown documentation tree
//!
//! - [`discovery`] walks the docs root and yields content files in a stable order,
//!   dropping excluded names such as `README.md`.
//! - [`builder`] reads each file, resolves its title and URL, cleans and truncates
//!   its text, and assembles the ordered list of records.
//!
//! The whole pass is sequential: one file is read, processed and released before the
//! next is opened.

pub mod builder;
pub mod discovery;

pub use builder::{build_index, build_record, record_from_markdown};
pub use discovery::discover_documents;
