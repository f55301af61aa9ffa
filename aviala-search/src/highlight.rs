//! Literal emphasis spans for rendered titles and snippets.
//!
//! The highlight is a literal, case-insensitive substring match — not fuzzy.
//! Queries are regex-escaped before the pattern is built, so metacharacters
//! in user input can never break the matcher or mismatch.

use regex::{Regex, RegexBuilder};

/// A run of text, either plain or wrapped in the emphasis marker by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub emphasized: bool,
}

impl Span {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: false,
        }
    }

    fn emphasized(text: &str) -> Self {
        Self {
            text: text.to_string(),
            emphasized: true,
        }
    }
}

/// Build the literal matcher for a query, or `None` for blank input.
#[must_use]
pub fn literal_pattern(query: &str) -> Option<Regex> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(trimmed))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Split `text` into spans, emphasizing every occurrence of `pattern`.
/// Concatenating the span texts reproduces `text` exactly.
#[must_use]
pub fn spans(text: &str, pattern: &Regex) -> Vec<Span> {
    let mut out = Vec::new();
    let mut last = 0;
    for m in pattern.find_iter(text) {
        if m.start() > last {
            out.push(Span::plain(&text[last..m.start()]));
        }
        out.push(Span::emphasized(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        out.push(Span::plain(&text[last..]));
    }
    out
}

/// A single unemphasized span covering all of `text`.
#[must_use]
pub fn plain(text: &str) -> Vec<Span> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![Span::plain(text)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|s| {
                if s.emphasized {
                    format!("<mark>{}</mark>", s.text)
                } else {
                    s.text.clone()
                }
            })
            .collect()
    }

    #[test]
    fn wraps_case_insensitive_occurrences() {
        let re = literal_pattern("widget").expect("pattern");
        let out = render(&spans("Guide to Widgets", &re));
        assert_eq!(out, "Guide to <mark>Widget</mark>s");
    }

    #[test]
    fn regex_metacharacters_are_treated_literally() {
        let re = literal_pattern("(widget").expect("escaped pattern builds");
        let out = render(&spans("see (widget) docs", &re));
        assert_eq!(out, "see <mark>(widget</mark>) docs");
    }

    #[test]
    fn span_texts_reassemble_the_input() {
        let re = literal_pattern("ab").expect("pattern");
        let text = "ab ab xyz AB";
        let joined: String = spans(text, &re).iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn blank_queries_produce_no_pattern() {
        assert!(literal_pattern("").is_none());
        assert!(literal_pattern("   ").is_none());
    }

    #[test]
    fn no_occurrence_yields_one_plain_span() {
        let re = literal_pattern("zebra").expect("pattern");
        let out = spans("Guide to Widgets", &re);
        assert_eq!(out.len(), 1);
        assert!(!out[0].emphasized);
    }
}
