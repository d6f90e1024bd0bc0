//! Application layer for research-assistant
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{MAX_SUB_QUESTIONS, ResearchParams};
pub use ports::{
    document_retriever::{DEFAULT_MAX_RESULTS, DocumentRetriever, RetrievalError},
    progress::{NoProgress, ProgressNotifier},
    research_logger::{NoResearchLogger, ResearchEvent, ResearchLogger},
    text_generator::{GenerationError, TextGenerator},
};
pub use use_cases::{
    decompose_query::QueryDecomposer, retrieve_documents::ParallelRetriever,
    run_research::RunResearchUseCase, synthesize_answer::AnswerSynthesizer,
};
