//! Query Decomposer
//!
//! Splits one user question into a handful of facet-focused sub-questions
//! with a single generation call. Decomposition can never abort a run:
//! when the model yields nothing usable the original query is searched
//! as-is.

use crate::config::MAX_SUB_QUESTIONS;
use crate::ports::text_generator::{TextGenerator, generate_or_empty};
use research_domain::{PromptTemplate, Query, SubQuestion};
use std::sync::Arc;
use tracing::{debug, info};

pub struct QueryDecomposer {
    generator: Arc<dyn TextGenerator>,
    max_sub_questions: usize,
}

impl QueryDecomposer {
    /// `max_sub_questions` is clamped to [`MAX_SUB_QUESTIONS`].
    pub fn new(generator: Arc<dyn TextGenerator>, max_sub_questions: usize) -> Self {
        Self {
            generator,
            max_sub_questions: max_sub_questions.min(MAX_SUB_QUESTIONS),
        }
    }

    /// Return between 1 and `max_sub_questions` sub-questions for `query`.
    pub async fn decompose(&self, query: &Query) -> Vec<SubQuestion> {
        let prompt = PromptTemplate::decomposition(query.content(), self.max_sub_questions);
        let response = generate_or_empty(self.generator.as_ref(), &prompt).await;

        let sub_questions = SubQuestion::parse_lines(&response, self.max_sub_questions);
        if sub_questions.is_empty() {
            info!("Decomposition produced no sub-questions, searching the original query");
            return vec![SubQuestion::new(query.content())];
        }

        debug!(count = sub_questions.len(), "Query decomposed");
        sub_questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{Reply, ScriptedGenerator};

    fn query(text: &str) -> Query {
        Query::try_new(text).unwrap()
    }

    fn texts(sub_questions: &[SubQuestion]) -> Vec<&str> {
        sub_questions.iter().map(SubQuestion::as_str).collect()
    }

    #[tokio::test]
    async fn test_three_lines_become_three_sub_questions() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Reply::Text(
            "What is A?\nWhat is B?\nWhat is C?".to_string(),
        )]));
        let decomposer = QueryDecomposer::new(generator.clone(), 3);

        let result = decomposer.decompose(&query("Tell me about ABC")).await;

        assert_eq!(texts(&result), vec!["What is A?", "What is B?", "What is C?"]);
        assert_eq!(generator.call_count(), 1);
        assert!(generator.prompts()[0].contains("Tell me about ABC"));
    }

    #[tokio::test]
    async fn test_extra_lines_dropped() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Reply::Text(
            "one\ntwo\nthree\nfour\nfive".to_string(),
        )]));
        let decomposer = QueryDecomposer::new(generator, 3);

        let result = decomposer.decompose(&query("q")).await;

        assert_eq!(texts(&result), vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_limit_above_three_is_capped() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Reply::Text(
            "one\ntwo\nthree\nfour\nfive".to_string(),
        )]));
        let decomposer = QueryDecomposer::new(generator.clone(), 5);

        let result = decomposer.decompose(&query("q")).await;

        assert_eq!(texts(&result), vec!["one", "two", "three"]);
        assert!(generator.prompts()[0].contains("3 specific"));
    }

    #[tokio::test]
    async fn test_empty_response_falls_back_to_query() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Reply::Text(
            "  \n\n ".to_string(),
        )]));
        let decomposer = QueryDecomposer::new(generator, 3);

        let result = decomposer.decompose(&query(" What is 2+2? ")).await;

        assert_eq!(texts(&result), vec![" What is 2+2? "]);
    }

    #[tokio::test]
    async fn test_generation_failure_falls_back_to_query() {
        let generator = Arc::new(ScriptedGenerator::new(vec![Reply::Fail(
            "quota exceeded".to_string(),
        )]));
        let decomposer = QueryDecomposer::new(generator, 3);

        let result = decomposer.decompose(&query("What is 2+2?")).await;

        assert_eq!(texts(&result), vec!["What is 2+2?"]);
    }

    #[tokio::test]
    async fn test_single_line_kept() {
        let generator = Arc::new(ScriptedGenerator::echo("Only question?"));
        let decomposer = QueryDecomposer::new(generator, 3);

        let result = decomposer.decompose(&query("q")).await;

        assert_eq!(texts(&result), vec!["Only question?"]);
    }
}
