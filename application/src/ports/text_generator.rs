//! Text generation port
//!
//! Defines the interface for asking an LLM provider to complete a prompt.

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during text generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Authentication failed for {0}")]
    AuthFailed(String),

    #[error("Rate limited by provider")]
    RateLimited,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider returned no content")]
    EmptyResponse,
}

/// Gateway for single-shot text generation
///
/// One prompt in, one completion out; no streaming and no conversation
/// state. Implementations (adapters) live in the infrastructure layer and
/// are shared read-only across concurrent research runs.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name used in logs
    fn name(&self) -> &str;

    /// Complete `prompt` and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Generate text, degrading any failure to an empty string.
///
/// This is where the "never raises" contract of the generation port is
/// enforced: callers treat `""` as "no usable output" and apply their own
/// fallback.
pub async fn generate_or_empty(generator: &dyn TextGenerator, prompt: &str) -> String {
    match generator.generate(prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!(provider = generator.name(), "Text generation failed: {}", e);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedGenerator(Result<&'static str, &'static str>);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            self.0
                .map(str::to_string)
                .map_err(|e| GenerationError::RequestFailed(e.to_string()))
        }
    }

    #[tokio::test]
    async fn test_generate_or_empty_passes_text_through() {
        let generator = FixedGenerator(Ok("hello"));
        assert_eq!(generate_or_empty(&generator, "p").await, "hello");
    }

    #[tokio::test]
    async fn test_generate_or_empty_swallows_errors() {
        let generator = FixedGenerator(Err("quota exceeded"));
        assert_eq!(generate_or_empty(&generator, "p").await, "");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            GenerationError::RateLimited.to_string(),
            "Rate limited by provider"
        );
        assert_eq!(
            GenerationError::AuthFailed("openrouter".to_string()).to_string(),
            "Authentication failed for openrouter"
        );
    }
}
