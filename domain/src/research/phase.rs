//! Research pipeline phases

use serde::{Deserialize, Serialize};

/// Stage of a research run.
///
/// Transitions are strictly linear: each stage runs once and there is no
/// error state. Failures inside a stage degrade to a fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Turning the query into sub-questions
    Decomposing,
    /// Fetching documents for every sub-question
    Retrieving,
    /// Writing the cited answer
    Synthesizing,
    /// Result assembled
    Done,
}

impl Phase {
    pub fn as_str(&self) -> &str {
        match self {
            Phase::Decomposing => "decomposing",
            Phase::Retrieving => "retrieving",
            Phase::Synthesizing => "synthesizing",
            Phase::Done => "done",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::Decomposing => "Query Decomposition",
            Phase::Retrieving => "Parallel Retrieval",
            Phase::Synthesizing => "Answer Synthesis",
            Phase::Done => "Done",
        }
    }

    /// The following phase, or `None` once done.
    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Decomposing => Some(Phase::Retrieving),
            Phase::Retrieving => Some(Phase::Synthesizing),
            Phase::Synthesizing => Some(Phase::Done),
            Phase::Done => None,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
