//! Error types for adapter construction and configuration loading

use thiserror::Error;

/// Errors raised while wiring adapters at startup.
///
/// These are fatal: a port that cannot be configured must stop the
/// process before any research request is served.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{provider} requires an API key: set the {env_var} environment variable")]
    MissingCredential { provider: String, env_var: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Search provider '{0}' is not available in this build")]
    ProviderUnavailable(String),
}
