//! Sub-question value object and decomposition response parsing

use serde::{Deserialize, Serialize};

/// One facet-focused question derived from the user's query.
///
/// Order reflects decomposition order only; it carries no ranking weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubQuestion(String);

impl SubQuestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a model response into sub-questions.
    ///
    /// Splits on line breaks, trims each line and drops empty ones, then
    /// keeps at most `max` entries in response order. Extra lines are
    /// dropped, not merged. May return an empty list.
    pub fn parse_lines(response: &str, max: usize) -> Vec<SubQuestion> {
        response
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .take(max)
            .map(SubQuestion::new)
            .collect()
    }
}

impl std::fmt::Display for SubQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SubQuestion {
    fn from(s: &str) -> Self {
        SubQuestion::new(s)
    }
}

impl From<String> for SubQuestion {
    fn from(s: String) -> Self {
        SubQuestion::new(s)
    }
}
