//! Search widget state machine and render description.
//!
//! All decision logic lives here as pure functions over explicit state; the
//! web crate only subscribes to platform events and renders the resulting
//! [`PanelView`].

use crate::highlight::{self, Span};
use crate::matcher::Searcher;
use crate::snippet::{self, SnippetConfig};

/// Open/closed state plus the live query text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetState {
    pub open: bool,
    pub query: String,
}

impl WidgetState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed → open. No-op when already open.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Open → closed, clearing the query. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }
}

/// What the result panel should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// No panel at all: blank query or an index that never loaded.
    Hidden,
    /// A loaded index matched nothing; shown as an explicit message.
    NoResults,
    Results(Vec<ResultView>),
}

impl PanelView {
    /// Permalink the Enter key navigates to, if any result is rendered.
    #[must_use]
    pub fn first_permalink(&self) -> Option<&str> {
        match self {
            Self::Results(results) => results.first().map(|r| r.permalink.as_str()),
            _ => None,
        }
    }
}

/// One rendered result: highlighted title and snippet, link target, tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub title: Vec<Span>,
    pub snippet: Vec<Span>,
    pub permalink: String,
    pub tags: Vec<String>,
}

/// Derive the panel for the current query.
///
/// `None` for the searcher means the index has not loaded (or failed to);
/// the widget then degrades to an empty panel for any query.
#[must_use]
pub fn build_panel(searcher: Option<&Searcher>, query: &str) -> PanelView {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return PanelView::Hidden;
    }
    let Some(searcher) = searcher else {
        return PanelView::Hidden;
    };

    let hits = searcher.search(trimmed);
    if hits.is_empty() {
        return PanelView::NoResults;
    }

    let pattern = highlight::literal_pattern(trimmed);
    let results = hits
        .iter()
        .filter_map(|hit| {
            let doc = searcher.document(hit)?;
            let excerpt = snippet::extract(&doc.contents, trimmed, SnippetConfig::default());
            let excerpt = excerpt.to_string();
            let (title, snippet) = match &pattern {
                Some(re) => (highlight::spans(&doc.title, re), highlight::spans(&excerpt, re)),
                None => (highlight::plain(&doc.title), highlight::plain(&excerpt)),
            };
            Some(ResultView {
                title,
                snippet,
                permalink: doc.permalink.clone(),
                tags: doc.tags.clone(),
            })
        })
        .collect();
    PanelView::Results(results)
}
