//! Research parameters: pipeline size limits.
//!
//! [`ResearchParams`] groups the static limits that shape a research run
//! in [`RunResearchUseCase`](crate::use_cases::run_research::RunResearchUseCase).

use crate::ports::document_retriever::DEFAULT_MAX_RESULTS;
use research_domain::research::context::{DEFAULT_MAX_CHARS_PER_SOURCE, DEFAULT_MAX_SOURCES};
use research_domain::{ContextBuilder, DomainError};
use serde::{Deserialize, Serialize};

/// Upper bound on sub-questions per research call.
pub const MAX_SUB_QUESTIONS: usize = 3;

/// Default number of sub-questions a query is split into.
pub const DEFAULT_MAX_SUB_QUESTIONS: usize = MAX_SUB_QUESTIONS;

/// Pipeline size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchParams {
    /// Maximum sub-questions kept from decomposition.
    pub max_sub_questions: usize,
    /// Documents requested from the retriever per sub-question.
    pub results_per_query: usize,
    /// Documents rendered into the synthesis context.
    pub max_context_sources: usize,
    /// Characters of content kept per rendered document.
    pub max_chars_per_source: usize,
}

impl Default for ResearchParams {
    fn default() -> Self {
        Self {
            max_sub_questions: DEFAULT_MAX_SUB_QUESTIONS,
            results_per_query: DEFAULT_MAX_RESULTS,
            max_context_sources: DEFAULT_MAX_SOURCES,
            max_chars_per_source: DEFAULT_MAX_CHARS_PER_SOURCE,
        }
    }
}

impl ResearchParams {
    // ==================== Builder Methods ====================

    pub fn with_max_sub_questions(mut self, max: usize) -> Self {
        self.max_sub_questions = max;
        self
    }

    pub fn with_results_per_query(mut self, max: usize) -> Self {
        self.results_per_query = max;
        self
    }

    pub fn with_max_context_sources(mut self, max: usize) -> Self {
        self.max_context_sources = max;
        self
    }

    pub fn with_max_chars_per_source(mut self, max: usize) -> Self {
        self.max_chars_per_source = max;
        self
    }

    /// Reject limits that would make a stage produce nothing, and more
    /// sub-questions than one call may fan out.
    pub fn validate(&self) -> Result<(), DomainError> {
        let limits = [
            ("max_sub_questions", self.max_sub_questions),
            ("results_per_query", self.results_per_query),
            ("max_context_sources", self.max_context_sources),
            ("max_chars_per_source", self.max_chars_per_source),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(DomainError::InvalidParameter(format!(
                    "{} must be at least 1",
                    name
                )));
            }
        }
        if self.max_sub_questions > MAX_SUB_QUESTIONS {
            return Err(DomainError::InvalidParameter(format!(
                "max_sub_questions must be at most {}",
                MAX_SUB_QUESTIONS
            )));
        }
        Ok(())
    }

    pub fn context_builder(&self) -> ContextBuilder {
        ContextBuilder::new(self.max_context_sources, self.max_chars_per_source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ResearchParams::default();
        assert_eq!(params.max_sub_questions, 3);
        assert_eq!(params.results_per_query, 5);
        assert_eq!(params.max_context_sources, 7);
        assert_eq!(params.max_chars_per_source, 4000);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let params = ResearchParams::default()
            .with_max_sub_questions(2)
            .with_results_per_query(10)
            .with_max_context_sources(4)
            .with_max_chars_per_source(1000);
        assert_eq!(params.max_sub_questions, 2);
        assert_eq!(params.results_per_query, 10);
        let builder = params.context_builder();
        assert_eq!(builder.max_sources(), 4);
        assert_eq!(builder.max_chars_per_source(), 1000);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = ResearchParams::default()
            .with_max_context_sources(0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidParameter("max_context_sources must be at least 1".to_string())
        );
    }

    #[test]
    fn test_too_many_sub_questions_rejected() {
        assert!(
            ResearchParams::default()
                .with_max_sub_questions(3)
                .validate()
                .is_ok()
        );
        let err = ResearchParams::default()
            .with_max_sub_questions(4)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidParameter("max_sub_questions must be at most 3".to_string())
        );
    }
}
