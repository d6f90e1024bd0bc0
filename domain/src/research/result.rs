//! Research result value object

use super::document::Document;
use serde::{Deserialize, Serialize};

/// Fixed answer returned when no document survived retrieval.
pub const NO_SOURCES_ANSWER: &str = "I couldn't find any relevant sources.";

/// Complete result of one research call
///
/// Degraded runs are encoded in the shape of this value (short answer,
/// empty `sources`) rather than as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchResult {
    /// The synthesized, cited answer
    pub answer: String,
    /// Deduplicated documents retrieved for the query
    pub sources: Vec<Document>,
}

impl ResearchResult {
    pub fn new(answer: impl Into<String>, sources: Vec<Document>) -> Self {
        Self {
            answer: answer.into(),
            sources,
        }
    }

    /// Result for a run in which retrieval produced nothing.
    pub fn no_sources() -> Self {
        Self::new(NO_SOURCES_ANSWER, Vec::new())
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn has_sources(&self) -> bool {
        !self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sources() {
        let result = ResearchResult::no_sources();
        assert_eq!(result.answer, "I couldn't find any relevant sources.");
        assert!(!result.has_sources());
        assert_eq!(result.source_count(), 0);
    }

    #[test]
    fn test_json_shape() {
        let result = ResearchResult::new("4", vec![Document::new("a.com", "T", "4")]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["answer"], "4");
        assert_eq!(json["sources"][0]["url"], "a.com");
    }
}
