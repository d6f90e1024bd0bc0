//! Search provider configuration from TOML (`[search]` section)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which document retriever backs the research pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Tavily search/extract API (requires an API key)
    #[default]
    Tavily,
    /// DuckDuckGo Instant Answer API (no key)
    #[serde(rename = "duckduckgo")]
    DuckDuckGo,
}

impl SearchProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchProvider::Tavily => "tavily",
            SearchProvider::DuckDuckGo => "duckduckgo",
        }
    }
}

impl fmt::Display for SearchProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SearchProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tavily" => Ok(SearchProvider::Tavily),
            "duckduckgo" | "ddg" => Ok(SearchProvider::DuckDuckGo),
            other => Err(format!(
                "unknown search provider '{}' (expected tavily or duckduckgo)",
                other
            )),
        }
    }
}

/// Raw search configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    pub provider: SearchProvider,
    /// Environment variable name for the Tavily key (default: "TAVILY_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the environment variable).
    pub api_key: Option<String>,
    /// Tavily API base URL.
    pub base_url: String,
    /// Tavily search depth: "basic" or "advanced".
    pub search_depth: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            provider: SearchProvider::default(),
            api_key_env: "TAVILY_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.tavily.com".to_string(),
            search_depth: "advanced".to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileSearchConfig {
    pub const SEARCH_DEPTHS: [&'static str; 2] = ["basic", "advanced"];

    /// Resolve the API key: direct value first, then the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())
    }
}
