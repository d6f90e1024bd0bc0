//! Language model configuration from TOML (`[llm]` section)

use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion endpoint.
///
/// Defaults target OpenRouter; any server that speaks the
/// `/chat/completions` protocol works by changing `base_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Base URL of the API (without `/chat/completions`).
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Environment variable name for the API key (default: "OPENROUTER_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the environment variable).
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Optional `HTTP-Referer` header (OpenRouter attribution).
    pub referer: Option<String>,
    /// Optional `X-Title` header (OpenRouter attribution).
    pub app_title: Option<String>,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "x-ai/grok-4.1-fast:free".to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            api_key: None,
            timeout_secs: 120,
            referer: None,
            app_title: Some("Research Assistant".to_string()),
        }
    }
}

impl FileLlmConfig {
    /// Resolve the API key: direct value first, then the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}
