//! Logging infrastructure: structured research transcripts.
//!
//! Provides [`JsonlResearchLogger`], a JSONL file writer that implements
//! the [`ResearchLogger`](research_application::ResearchLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlResearchLogger;
