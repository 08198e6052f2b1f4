use std::path::{Component, Path};

use anyhow::{Context, Result};

/// Path of `file` relative to `root`, always joined with `/`
///
/// # Errors
///
/// Returns an error if `file` is not inside `root`.
pub fn relative_url_path(root: &Path, file: &Path) -> Result<String> {
    let relative = file.strip_prefix(root).with_context(|| {
        format!("{} is not inside documentation root {}", file.display(), root.display())
    })?;

    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();

    Ok(parts.join("/"))
}

/// Map a markdown path relative to the docs root onto its published URL
///
/// `.md` becomes `.html`, an `index.html` page maps to its directory, and the result is
/// prefixed with `base_url`. Doubled `/` separators produced by the join are collapsed.
///
/// # Examples
///
/// ```
/// use docs_search_index::utils::document_url;
///
/// assert_eq!(document_url("/site", "guides/setup.md"), "/site/guides/setup.html");
/// assert_eq!(document_url("/site", "guides/index.md"), "/site/guides/");
/// assert_eq!(document_url("/site", "index.md"), "/site/");
/// ```
pub fn document_url(base_url: &str, relative_path: &str) -> String {
    let url_path = relative_path.replace(".md", ".html");

    let url_path = if url_path == "index.html" {
        ""
    } else if let Some(dir) = url_path.strip_suffix("index.html").filter(|d| d.ends_with('/')) {
        dir
    } else {
        url_path.as_str()
    };

    collapse_separators(&format!("{}/{}", base_url, url_path))
}

/// Collapse runs of `/` into one, leaving a leading `scheme://` intact
fn collapse_separators(url: &str) -> String {
    let (scheme, rest) = match url.find("://") {
        Some(idx) if is_scheme(&url[..idx]) => url.split_at(idx + 3),
        _ => ("", url),
    };

    let mut result = String::with_capacity(url.len());
    result.push_str(scheme);

    let mut previous_is_slash = false;
    for c in rest.chars() {
        if c == '/' && previous_is_slash {
            continue;
        }
        previous_is_slash = c == '/';
        result.push(c);
    }

    result
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
