//! Port for structured research logging.
//!
//! Defines the [`ResearchLogger`] trait for recording what each research
//! run did (sub-questions, retrieved urls, answer size) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable transcript (JSONL).

use serde_json::Value;

/// A structured research event for logging.
pub struct ResearchEvent {
    /// Event type identifier (e.g., "decomposed", "retrieved", "synthesized").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ResearchEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging research events to a structured log.
///
/// `log` is synchronous and non-fallible; logging failures are ignored so
/// they never affect the research result.
pub trait ResearchLogger: Send + Sync {
    /// Record a research event.
    fn log(&self, event: ResearchEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoResearchLogger;

impl ResearchLogger for NoResearchLogger {
    fn log(&self, _event: ResearchEvent) {}
}
