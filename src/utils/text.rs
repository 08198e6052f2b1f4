use std::path::Path;

/// Capitalize the first letter of every word and lowercase the rest
///
/// A word starts at any letter not preceded by another letter, so digits and
/// punctuation also begin a new word (`v2beta` becomes `V2Beta`).
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }

    result
}

/// Turn a file name into a human-readable title
///
/// The extension is dropped, `-` and `_` become spaces and the result is title-cased.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use docs_search_index::utils::title_from_file_name;
///
/// assert_eq!(title_from_file_name(Path::new("docs/getting-started.md")), "Getting Started");
/// ```
pub fn title_from_file_name(path: &Path) -> String {
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    title_case(&stem.replace(['-', '_'], " "))
}

/// Keep at most `max_chars` characters of `text`
///
/// Counts Unicode scalar values, never splits a character and ignores word boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
