use serde::{Deserialize, Serialize};

/// One entry of the search index
///
/// `url` is the only identifier; duplicates are not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub title: String,
    pub url: String,
    pub content: String,
}
