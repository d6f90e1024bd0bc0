//! OpenAI-compatible chat completion adapter.
//!
//! Works with OpenRouter (the default), OpenAI itself and local servers
//! that expose `/chat/completions`. Each call is a single non-streaming
//! request with a system message and the prompt as the user message.

use crate::config::FileLlmConfig;
use crate::error::ConfigError;
use async_trait::async_trait;
use research_application::ports::text_generator::{GenerationError, TextGenerator};
use research_domain::PromptTemplate;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

const PROVIDER_NAME: &str = "openai-compatible";

/// Text generator backed by an OpenAI-compatible HTTP API
pub struct OpenAiCompatGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    referer: Option<String>,
    app_title: Option<String>,
}

impl OpenAiCompatGenerator {
    /// Build the adapter from config, resolving the API key.
    ///
    /// Fails with [`ConfigError::MissingCredential`] when neither a direct
    /// key nor the configured environment variable is set.
    pub fn from_config(config: &FileLlmConfig) -> Result<Self, ConfigError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| ConfigError::MissingCredential {
                provider: "LLM provider".to_string(),
                env_var: config.api_key_env.clone(),
            })?;
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(
        config: &FileLlmConfig,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: config.model.clone(),
            referer: config.referer.clone(),
            app_title: config.app_title.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": PromptTemplate::system() },
                { "role": "user", "content": prompt },
            ],
        })
    }

    fn map_http_error(status: reqwest::StatusCode, body: &str) -> GenerationError {
        match status.as_u16() {
            401 | 403 => {
                debug!(body = %body, "Authentication failed ({})", status);
                GenerationError::AuthFailed(PROVIDER_NAME.to_string())
            }
            429 => GenerationError::RateLimited,
            code if code >= 500 => {
                GenerationError::RequestFailed(format!("Server error ({}): {}", status, body))
            }
            _ => GenerationError::RequestFailed(format!("HTTP {}: {}", status, body)),
        }
    }

    fn map_transport_error(e: reqwest::Error) -> GenerationError {
        if e.is_connect() || e.is_timeout() {
            GenerationError::ConnectionError(e.to_string())
        } else {
            GenerationError::RequestFailed(e.to_string())
        }
    }

    fn parse_response(body: &Value) -> Result<String, GenerationError> {
        let content = body
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                GenerationError::InvalidResponse("missing choices[0].message.content".to_string())
            })?;

        if content.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(content.to_string())
    }
}

#[async_trait]
impl TextGenerator for OpenAiCompatGenerator {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(model = %self.model, prompt_chars = prompt.len(), "Sending chat completion");

        let mut request = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt));
        if let Some(referer) = &self.referer {
            request = request.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.app_title {
            request = request.header("X-Title", title);
        }

        let response = request.send().await.map_err(Self::map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_http_error(status, &body));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;
        Self::parse_response(&body)
    }
}
