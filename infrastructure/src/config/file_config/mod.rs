//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod llm;
mod output;
mod research;
mod search;
mod server;

pub use llm::FileLlmConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use research::FileResearchConfig;
pub use search::{FileSearchConfig, SearchProvider};
pub use server::FileServerConfig;

use research_application::ResearchParams;
use research_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Language model endpoint
    pub llm: FileLlmConfig,
    /// Document retriever
    pub search: FileSearchConfig,
    /// Pipeline limits
    pub research: FileResearchConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks empty required strings, zero limits, unknown enum-like
    /// values and limits above what the provider accepts.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Required strings
        let required = [
            ("llm.base_url", &self.llm.base_url),
            ("llm.model", &self.llm.model),
            ("llm.api_key_env", &self.llm.api_key_env),
            ("server.bind", &self.server.bind),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{}: must not be empty", field),
                ));
            }
        }

        // 2. Pipeline limits
        issues.extend(self.research.validate());

        // 3. Tavily search depth
        let depth = self.search.search_depth.to_lowercase();
        if !FileSearchConfig::SEARCH_DEPTHS.contains(&depth.as_str()) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidEnumValue {
                    field: "search.search_depth".to_string(),
                    value: self.search.search_depth.clone(),
                    valid_values: FileSearchConfig::SEARCH_DEPTHS
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                },
                format!(
                    "search.search_depth: unknown value '{}', the provider may reject it",
                    self.search.search_depth
                ),
            ));
        }

        issues
    }

    pub fn research_params(&self) -> ResearchParams {
        self.research.to_params()
    }
}
