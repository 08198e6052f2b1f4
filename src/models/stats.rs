use std::collections::HashSet;

use super::DocumentRecord;

/// Summary of a search index, shown by the `stats` command
#[derive(Debug, Clone, PartialEq)]
pub struct IndexStats {
    pub documents: usize,
    pub unique_urls: usize,
    pub duplicate_urls: usize,
    /// Records whose content length reached the excerpt limit
    pub truncated: usize,
    pub average_content_chars: f64,
}

impl IndexStats {
    pub fn from_records(records: &[DocumentRecord], max_content_chars: usize) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let mut total_chars = 0usize;
        let mut truncated = 0;

        for record in records {
            seen.insert(record.url.as_str());
            let chars = record.content.chars().count();
            total_chars += chars;
            if chars >= max_content_chars {
                truncated += 1;
            }
        }

        let average_content_chars =
            if records.is_empty() { 0.0 } else { total_chars as f64 / records.len() as f64 };

        Self {
            documents: records.len(),
            unique_urls: seen.len(),
            duplicate_urls: records.len() - seen.len(),
            truncated,
            average_content_chars,
        }
    }
}
