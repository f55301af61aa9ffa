//! Aviala search core
//!
//! Platform-agnostic logic for the Aviala theme's search widget and
//! sticky-scroll controller. This crate knows nothing about the DOM; the web
//! crate adapts browser events onto these types and renders the descriptions
//! they produce.

#![forbid(unsafe_code)]

pub mod document;
pub mod highlight;
pub mod matcher;
pub mod scroll;
pub mod snippet;
pub mod widget;

// Re-export commonly used types
pub use document::{Document, SearchIndex};
pub use highlight::Span;
pub use matcher::{FieldMatch, FuzzyScorer, MatchConfig, MatchField, SearchHit, Searcher, SkimScorer};
pub use scroll::{HeaderMode, ScrollConfig, ScrollState, SectionMetrics};
pub use snippet::{Snippet, SnippetConfig};
pub use widget::{PanelView, ResultView, WidgetState, build_panel};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
