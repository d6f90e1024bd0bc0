//! Domain layer for research-assistant
//!
//! This crate contains the core value objects and pure policies of the
//! research pipeline. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! A research run turns one [`Query`] into up to three [`SubQuestion`]s,
//! retrieves [`Document`]s for each, deduplicates them by url, and asks a
//! model for a cited answer over a bounded context built by
//! [`ContextBuilder`]. The outcome is a [`ResearchResult`].

pub mod config;
pub mod core;
pub mod prompt;
pub mod research;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::{error::DomainError, query::Query};
pub use prompt::PromptTemplate;
pub use research::{
    ContextBuilder, Document, NO_SOURCES_ANSWER, Phase, ResearchContext, ResearchResult,
    SubQuestion, dedup_by_url,
};
