//! Snippet extraction for search-result previews.
//!
//! A bounded excerpt of a document body around the first case-insensitive
//! occurrence of the query, falling back to the start of the content when no
//! literal occurrence exists. All arithmetic is in characters; slicing never
//! lands inside a UTF-8 code point.

use std::fmt;

/// Width limits for [`extract`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetConfig {
    /// Total excerpt length, in characters.
    pub max_chars: usize,
    /// How far the excerpt backs off before the occurrence.
    pub lead_chars: usize,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            max_chars: 120,
            lead_chars: 30,
        }
    }
}

/// An excerpt plus whether either boundary cut into the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub body: String,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
}

impl fmt::Display for Snippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.leading_ellipsis {
            f.write_str("...")?;
        }
        f.write_str(&self.body)?;
        if self.trailing_ellipsis {
            f.write_str("...")?;
        }
        Ok(())
    }
}

/// Extract the preview excerpt for `query` from `contents`.
#[must_use]
pub fn extract(contents: &str, query: &str, config: SnippetConfig) -> Snippet {
    let total = contents.chars().count();
    let start = find_case_insensitive(contents, query.trim())
        .map_or(0, |hit| hit.saturating_sub(config.lead_chars));

    let body: String = contents.chars().skip(start).take(config.max_chars).collect();
    Snippet {
        body,
        leading_ellipsis: start > 0,
        trailing_ellipsis: start + config.max_chars < total,
    }
}

/// Character position of the first case-insensitive occurrence of `needle`.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return None;
    }
    let haystack: Vec<char> = haystack.chars().collect();
    let last_start = haystack.len().checked_sub(needle.len())?;
    (0..=last_start).find(|&i| {
        haystack[i..i + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(a, b)| chars_eq_ci(*a, *b))
    })
}

fn chars_eq_ci(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
