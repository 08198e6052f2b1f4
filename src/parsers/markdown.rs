//! Markdown to plain text conversion for search excerpts.
//!
//! The cleaner is a fixed chain of regex rewrites, not a markdown parser. Rule order
//! matters: later rules assume the syntax handled by earlier ones is already gone.
//! It is lossy on purpose. Paired `*` or `_` on a line are stripped even when they are
//! not emphasis (`2 * 3 * 4`, `snake_case_name`), and indices generated by earlier
//! versions rely on that output.

use std::sync::LazyLock;

use regex::Regex;

static FENCED_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[\s\S]*?```").expect("valid fenced code regex"));

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("valid inline code regex"));

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").expect("valid image regex"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid link regex"));

static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").expect("valid heading regex"));

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[*_]{1,2}([^*_]+)[*_]{1,2}").expect("valid emphasis regex"));

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid html tag regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Strip markdown and HTML markup, returning single-spaced plain text
///
/// Rules, applied in order:
/// 1. fenced code blocks are removed with their contents
/// 2. inline code spans are removed
/// 3. images are removed, alt text included
/// 4. links are replaced by their text
/// 5. heading markers are removed, heading text kept
/// 6. `*`/`_` emphasis markers are removed, enclosed text kept
/// 7. remaining HTML tags are removed
/// 8. whitespace runs collapse to one space and the result is trimmed
///
/// # Examples
///
/// ```
/// use docs_search_index::parsers::clean_markdown;
///
/// let body = "# Title\n\nSee [here](http://x) for **bold** text. `code` end.";
/// assert_eq!(clean_markdown(body), "Title See here for bold text. end.");
/// ```
pub fn clean_markdown(text: &str) -> String {
    let text = FENCED_CODE.replace_all(text, "");
    let text = INLINE_CODE.replace_all(&text, "");
    let text = IMAGE.replace_all(&text, "");
    let text = LINK.replace_all(&text, "${1}");
    let text = HEADING_MARKER.replace_all(&text, "");
    let text = EMPHASIS.replace_all(&text, "${1}");
    let text = HTML_TAG.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");

    text.trim().to_string()
}
