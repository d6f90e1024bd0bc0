//! Document value object

use serde::{Deserialize, Serialize};

/// A single retrieved web resource (Value Object)
///
/// Produced by a document retriever and never mutated afterwards.
/// The `url` is the identity used for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Document {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Length of the content in characters.
    ///
    /// Used as the depth-of-coverage proxy when ranking sources.
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }
}
