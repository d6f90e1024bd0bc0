//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for research results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Answer followed by the numbered source list (default)
    Full,
    /// Only the answer text
    Answer,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Full
    }
}
