//! Matching and ranking
//!
//! The fuzzy-distance algorithm itself is a black box behind [`FuzzyScorer`];
//! the default implementation wraps the skim matcher. This module owns what
//! sits on top of it: per-field weighting, the score floor, ordering, and
//! truncation.

use std::cmp::Ordering;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::document::{Document, SearchIndex};

/// Which field of a document produced the best match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Title,
    Contents,
    Tags,
}

/// Raw outcome of scoring one pattern against one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMatch {
    pub score: i64,
    /// Character positions the matcher attributed to the pattern.
    pub indices: Vec<usize>,
}

/// The external ranking function. `None` means the pattern does not match
/// within the algorithm's distance tolerance.
pub trait FuzzyScorer {
    fn score(&self, pattern: &str, text: &str) -> Option<FieldMatch>;
}

/// Default scorer backed by the skim algorithm, case-insensitive.
pub struct SkimScorer {
    matcher: SkimMatcherV2,
}

impl SkimScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl Default for SkimScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyScorer for SkimScorer {
    fn score(&self, pattern: &str, text: &str) -> Option<FieldMatch> {
        self.matcher
            .fuzzy_indices(text, pattern)
            .map(|(score, indices)| FieldMatch { score, indices })
    }
}

/// Field weights, exclusion floor and result cap.
///
/// The weights mirror the original theme configuration: titles outrank
/// contents, contents outrank tags.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchConfig {
    pub title_weight: f64,
    pub contents_weight: f64,
    pub tags_weight: f64,
    /// Weighted scores below this are excluded. The scorer already rejects
    /// patterns beyond its distance tolerance; the floor only trims weak
    /// residual matches.
    pub score_floor: f64,
    pub limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            title_weight: 0.8,
            contents_weight: 0.5,
            tags_weight: 0.3,
            score_floor: 0.0,
            limit: 8,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn weight(&self, field: MatchField) -> f64 {
        match field {
            MatchField::Title => self.title_weight,
            MatchField::Contents => self.contents_weight,
            MatchField::Tags => self.tags_weight,
        }
    }
}

/// One ranked result: document position, weighted score and where it matched.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub doc: usize,
    pub score: f64,
    pub field: MatchField,
    pub indices: Vec<usize>,
}

/// A loaded index paired with a scorer and ranking configuration.
pub struct Searcher {
    index: SearchIndex,
    scorer: Box<dyn FuzzyScorer>,
    config: MatchConfig,
}

impl Searcher {
    #[must_use]
    pub fn new(index: SearchIndex, scorer: Box<dyn FuzzyScorer>, config: MatchConfig) -> Self {
        Self {
            index,
            scorer,
            config,
        }
    }

    /// Skim-backed searcher with the theme's default weights.
    #[must_use]
    pub fn with_defaults(index: SearchIndex) -> Self {
        Self::new(index, Box::new(SkimScorer::new()), MatchConfig::default())
    }

    #[must_use]
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    #[must_use]
    pub fn document(&self, hit: &SearchHit) -> Option<&Document> {
        self.index.get(hit.doc)
    }

    /// Rank every document against `query`.
    ///
    /// Scores each field, keeps the best weighted field per document, drops
    /// entries under the floor, sorts by weighted score descending (ties keep
    /// document order) and truncates to the configured limit. Empty and
    /// whitespace-only queries return no hits.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let pattern = query.trim();
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .index
            .docs
            .iter()
            .enumerate()
            .filter_map(|(pos, doc)| self.score_document(pos, doc, pattern))
            .filter(|hit| hit.score >= self.config.score_floor)
            .collect();

        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(self.config.limit);
        hits
    }

    #[allow(clippy::cast_precision_loss)]
    fn score_document(&self, pos: usize, doc: &Document, pattern: &str) -> Option<SearchHit> {
        let mut best: Option<SearchHit> = None;
        let mut consider = |field: MatchField, text: &str| {
            if let Some(m) = self.scorer.score(pattern, text) {
                let weighted = m.score as f64 * self.config.weight(field);
                if best.as_ref().is_none_or(|b| weighted > b.score) {
                    best = Some(SearchHit {
                        doc: pos,
                        score: weighted,
                        field,
                        indices: m.indices,
                    });
                }
            }
        };

        consider(MatchField::Title, &doc.title);
        consider(MatchField::Contents, &doc.contents);
        for tag in &doc.tags {
            consider(MatchField::Tags, tag);
        }
        best
    }
}
