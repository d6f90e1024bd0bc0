//! Infrastructure layer for research-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod error;
pub mod logging;
pub mod providers;
pub mod search;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLlmConfig, FileOutputConfig, FileOutputFormat,
    FileResearchConfig, FileSearchConfig, FileServerConfig, SearchProvider,
};
pub use error::ConfigError;
pub use logging::JsonlResearchLogger;
pub use providers::OpenAiCompatGenerator;
#[cfg(feature = "duckduckgo")]
pub use search::DuckDuckGoRetriever;
pub use search::{QueryRoute, TavilyRetriever};
