//! Parallel Retriever
//!
//! Fans sub-questions out to the document retriever as a scatter-gather
//! task group: one task per sub-question, all spawned before any is
//! awaited, then joined in full. Total latency is that of the slowest
//! branch. A failing branch contributes no documents; there is no
//! partial-result path.

use crate::ports::document_retriever::DocumentRetriever;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use research_domain::{Document, Phase, SubQuestion, dedup_by_url};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

pub struct ParallelRetriever {
    retriever: Arc<dyn DocumentRetriever>,
    results_per_query: usize,
}

impl ParallelRetriever {
    pub fn new(retriever: Arc<dyn DocumentRetriever>, results_per_query: usize) -> Self {
        Self {
            retriever,
            results_per_query,
        }
    }

    /// Retrieve and deduplicate documents for every sub-question
    pub async fn retrieve_all(&self, sub_questions: &[SubQuestion]) -> Vec<Document> {
        self.retrieve_all_with_progress(sub_questions, &NoProgress)
            .await
    }

    /// Retrieve with per-branch progress callbacks
    ///
    /// Branch results are merged in sub-question order (completion order
    /// is irrelevant), then deduplicated by url with last-copy-wins.
    pub async fn retrieve_all_with_progress(
        &self,
        sub_questions: &[SubQuestion],
        progress: &dyn ProgressNotifier,
    ) -> Vec<Document> {
        info!(
            sub_questions = sub_questions.len(),
            provider = self.retriever.name(),
            "Retrieving documents"
        );
        progress.on_phase_start(&Phase::Retrieving, sub_questions.len());

        let mut join_set = JoinSet::new();

        for (index, sub_question) in sub_questions.iter().enumerate() {
            let retriever = Arc::clone(&self.retriever);
            let query = sub_question.as_str().to_string();
            let max_results = self.results_per_query;

            join_set.spawn(async move {
                let result = retriever.search(&query, max_results).await;
                (index, query, result)
            });
        }

        let mut branches: Vec<Vec<Document>> = vec![Vec::new(); sub_questions.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, query, Ok(documents))) => {
                    debug!(query = %query, documents = documents.len(), "Branch completed");
                    progress.on_task_complete(&Phase::Retrieving, &query, true);
                    branches[index] = documents;
                }
                Ok((_, query, Err(e))) => {
                    warn!(query = %query, "Retrieval failed: {}", e);
                    progress.on_task_complete(&Phase::Retrieving, &query, false);
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        progress.on_phase_complete(&Phase::Retrieving);

        let merged: Vec<Document> = branches.into_iter().flatten().collect();
        let merged_count = merged.len();
        let unique = dedup_by_url(merged);
        info!(
            merged = merged_count,
            unique = unique.len(),
            "Retrieval complete"
        );
        unique
    }
}
