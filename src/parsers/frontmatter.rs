use std::sync::LazyLock;

use regex::Regex;

/// Marker that opens and closes a metadata block
const FRONTMATTER_DELIMITER: &str = "---";

/// First `title:` line in the metadata block
static TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^title:\s*(.+)$").expect("valid title regex"));

/// A document split into its optional metadata title and its markdown body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    pub title: Option<String>,
    pub body: &'a str,
}

/// Split a markdown document into metadata title and body
///
/// A document starting with `---` is split on the delimiter into at most three parts.
/// With three parts the middle one is the metadata block and the last one (trimmed)
/// is the body. Anything else leaves the whole text as body with no title.
///
/// Only the first `title:` line is consulted; a value that is blank after trimming
/// counts as no title.
///
/// # Examples
///
/// ```
/// use docs_search_index::parsers::extract_frontmatter;
///
/// let doc = "---\ntitle: Install Guide\nlayout: page\n---\n\nRun the installer.";
/// let parsed = extract_frontmatter(doc);
/// assert_eq!(parsed.title.as_deref(), Some("Install Guide"));
/// assert_eq!(parsed.body, "Run the installer.");
/// ```
pub fn extract_frontmatter(text: &str) -> Frontmatter<'_> {
    if text.starts_with(FRONTMATTER_DELIMITER) {
        let mut parts = text.splitn(3, FRONTMATTER_DELIMITER);
        // The first part is the empty prefix before the opening delimiter
        let _ = parts.next();
        if let (Some(metadata), Some(body)) = (parts.next(), parts.next()) {
            return Frontmatter { title: find_title(metadata.trim()), body: body.trim() };
        }
    }

    Frontmatter { title: None, body: text }
}

fn find_title(metadata: &str) -> Option<String> {
    TITLE_LINE
        .captures(metadata)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
}
