//! Run Research use case
//!
//! Orchestrates the full research flow:
//! `Decomposing -> Retrieving -> Synthesizing -> Done`.
//!
//! Each stage runs exactly once and degrades to a fallback value on
//! failure, so [`RunResearchUseCase::execute`] always returns a
//! [`ResearchResult`]. Callers judge quality from its shape (answer
//! length, source count).

use crate::config::ResearchParams;
use crate::ports::document_retriever::DocumentRetriever;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::research_logger::{NoResearchLogger, ResearchEvent, ResearchLogger};
use crate::ports::text_generator::TextGenerator;
use crate::use_cases::decompose_query::QueryDecomposer;
use crate::use_cases::retrieve_documents::ParallelRetriever;
use crate::use_cases::synthesize_answer::AnswerSynthesizer;
use research_domain::{Phase, Query, ResearchResult};
use std::sync::Arc;
use tracing::info;

/// Use case for answering one query with cited sources
///
/// Holds shared, read-only handles to both ports; cloning is cheap and
/// clones can serve concurrent requests independently.
#[derive(Clone)]
pub struct RunResearchUseCase {
    generator: Arc<dyn TextGenerator>,
    retriever: Arc<dyn DocumentRetriever>,
    params: ResearchParams,
    logger: Arc<dyn ResearchLogger>,
}

impl RunResearchUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>, retriever: Arc<dyn DocumentRetriever>) -> Self {
        Self {
            generator,
            retriever,
            params: ResearchParams::default(),
            logger: Arc::new(NoResearchLogger),
        }
    }

    pub fn with_params(mut self, params: ResearchParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn ResearchLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn params(&self) -> &ResearchParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, query: &Query) -> ResearchResult {
        self.execute_with_progress(query, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        query: &Query,
        progress: &dyn ProgressNotifier,
    ) -> ResearchResult {
        info!(
            generator = self.generator.name(),
            retriever = self.retriever.name(),
            "Starting research"
        );

        // Phase 1: Decomposition
        progress.on_phase_start(&Phase::Decomposing, 1);
        let decomposer =
            QueryDecomposer::new(Arc::clone(&self.generator), self.params.max_sub_questions);
        let sub_questions = decomposer.decompose(query).await;
        progress.on_task_complete(&Phase::Decomposing, query.content(), true);
        progress.on_phase_complete(&Phase::Decomposing);
        info!(sub_questions = ?sub_questions, "Researching sub-topics");
        self.logger.log(ResearchEvent::new(
            "decomposed",
            serde_json::json!({
                "query": query.content(),
                "sub_questions": sub_questions,
            }),
        ));

        // Phase 2: Retrieval
        let retriever =
            ParallelRetriever::new(Arc::clone(&self.retriever), self.params.results_per_query);
        let sources = retriever
            .retrieve_all_with_progress(&sub_questions, progress)
            .await;
        self.logger.log(ResearchEvent::new(
            "retrieved",
            serde_json::json!({
                "documents": sources.len(),
                "urls": sources.iter().map(|d| d.url.as_str()).collect::<Vec<_>>(),
            }),
        ));

        // Phase 3: Synthesis
        progress.on_phase_start(&Phase::Synthesizing, 1);
        let synthesizer =
            AnswerSynthesizer::new(Arc::clone(&self.generator), self.params.context_builder());
        let answer = synthesizer.synthesize(query, &sources).await;
        progress.on_task_complete(&Phase::Synthesizing, query.content(), !answer.is_empty());
        progress.on_phase_complete(&Phase::Synthesizing);
        self.logger.log(ResearchEvent::new(
            "synthesized",
            serde_json::json!({
                "answer_chars": answer.chars().count(),
                "sources": sources.len(),
            }),
        ));

        info!(
            sources = sources.len(),
            answer_chars = answer.len(),
            "Research complete"
        );
        ResearchResult::new(answer, sources)
    }
}
