//! Document retrieval port
//!
//! Defines the interface for fetching web documents for a query.

use async_trait::async_trait;
use research_domain::Document;
use thiserror::Error;

/// Default number of documents requested per query.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Errors that can occur during document retrieval
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Source of documents for a free-text query
///
/// How the query is interpreted (URL extraction, site mapping, plain
/// search) is up to the adapter. Callers degrade an `Err` to "zero
/// documents from this query" rather than aborting.
#[async_trait]
pub trait DocumentRetriever: Send + Sync {
    /// Provider name used in logs
    fn name(&self) -> &str;

    /// Return up to `max_results` documents for `query`, best first
    async fn search(&self, query: &str, max_results: usize)
    -> Result<Vec<Document>, RetrievalError>;
}
