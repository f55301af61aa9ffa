//! Document index model
//!
//! One record per indexed page, produced by the site generator and served as
//! a flat JSON array. The schema (`title`, `contents`, `permalink`, optional
//! `tags`) is the contract this crate depends on; any producer satisfying it
//! is interchangeable.

use serde::{Deserialize, Serialize};

use crate::SearchError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub contents: String,
    pub permalink: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SearchIndex {
    pub docs: Vec<Document>,
}

impl SearchIndex {
    #[must_use]
    pub fn empty() -> Self {
        Self { docs: vec![] }
    }

    /// Parse the index from the JSON array the generator emits.
    ///
    /// # Errors
    /// Returns an error when the payload is not a valid document array.
    pub fn from_json(json: &str) -> Result<Self, SearchError> {
        let docs: Vec<Document> = serde_json::from_str(json)?;
        Ok(Self { docs })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Document> {
        self.docs.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_with_and_without_tags() {
        let json = r#"[
            {"title":"Guide to Widgets","contents":"This guide explains widgets in depth.","permalink":"/guide","tags":["howto"]},
            {"title":"About","contents":"About this site.","permalink":"/about"}
        ]"#;
        let index = SearchIndex::from_json(json).expect("index should parse");
        assert_eq!(index.len(), 2);
        assert_eq!(index.docs[0].tags, vec!["howto".to_string()]);
        assert!(index.docs[1].tags.is_empty());
    }

    #[test]
    fn malformed_payload_is_an_error_not_a_panic() {
        assert!(SearchIndex::from_json("{\"not\":\"an array\"}").is_err());
        assert!(SearchIndex::from_json("[{\"title\":1}]").is_err());
    }
}
