//! Pipeline limits from TOML (`[research]` section)

use research_application::{MAX_SUB_QUESTIONS, ResearchParams};
use research_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Tavily rejects `max_results` above this value.
const MAX_RESULTS_PER_QUERY: usize = 20;

/// Raw research limits from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResearchConfig {
    pub max_sub_questions: usize,
    pub results_per_query: usize,
    pub max_context_sources: usize,
    pub max_chars_per_source: usize,
}

impl Default for FileResearchConfig {
    fn default() -> Self {
        let params = ResearchParams::default();
        Self {
            max_sub_questions: params.max_sub_questions,
            results_per_query: params.results_per_query,
            max_context_sources: params.max_context_sources,
            max_chars_per_source: params.max_chars_per_source,
        }
    }
}

impl FileResearchConfig {
    pub fn to_params(&self) -> ResearchParams {
        ResearchParams::default()
            .with_max_sub_questions(self.max_sub_questions)
            .with_results_per_query(self.results_per_query)
            .with_max_context_sources(self.max_context_sources)
            .with_max_chars_per_source(self.max_chars_per_source)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let limits = [
            ("research.max_sub_questions", self.max_sub_questions),
            ("research.results_per_query", self.results_per_query),
            ("research.max_context_sources", self.max_context_sources),
            ("research.max_chars_per_source", self.max_chars_per_source),
        ];
        for (field, value) in limits {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ZeroLimit {
                        field: field.to_string(),
                    },
                    format!("{}: must be at least 1", field),
                ));
            }
        }

        if self.max_sub_questions > MAX_SUB_QUESTIONS {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::LimitTooHigh {
                    field: "research.max_sub_questions".to_string(),
                    max: MAX_SUB_QUESTIONS,
                },
                format!(
                    "research.max_sub_questions: {} exceeds the maximum of {}",
                    self.max_sub_questions, MAX_SUB_QUESTIONS
                ),
            ));
        }

        if self.results_per_query > MAX_RESULTS_PER_QUERY {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::LimitTooHigh {
                    field: "research.results_per_query".to_string(),
                    max: MAX_RESULTS_PER_QUERY,
                },
                format!(
                    "research.results_per_query: {} exceeds the provider maximum of {}",
                    self.results_per_query, MAX_RESULTS_PER_QUERY
                ),
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_params() {
        assert_eq!(
            FileResearchConfig::default().to_params(),
            ResearchParams::default()
        );
    }

    #[test]
    fn test_zero_limits_reported() {
        let config = FileResearchConfig {
            max_sub_questions: 0,
            max_chars_per_source: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.is_error()));
    }

    #[test]
    fn test_too_many_sub_questions_is_error() {
        let config = FileResearchConfig {
            max_sub_questions: 4,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::LimitTooHigh {
                field: "research.max_sub_questions".to_string(),
                max: 3,
            }
        );
    }

    #[test]
    fn test_results_per_query_over_provider_max_warns() {
        let config = FileResearchConfig {
            results_per_query: 50,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
