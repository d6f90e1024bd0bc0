//! Application-level configuration.
//!
//! - [`ResearchParams`]: pipeline size limits (sub-questions, results, context budget)

pub mod research_params;

pub use research_params::{MAX_SUB_QUESTIONS, ResearchParams};
