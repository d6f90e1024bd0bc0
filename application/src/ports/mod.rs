//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod document_retriever;
pub mod progress;
pub mod research_logger;
pub mod text_generator;
