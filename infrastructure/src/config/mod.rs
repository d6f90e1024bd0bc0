//! Configuration file loading for research-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables `RESEARCH_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./research.toml` or `./.research.toml`
//! 4. Global: `$XDG_CONFIG_HOME/research-assistant/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLlmConfig, FileOutputConfig, FileOutputFormat, FileResearchConfig,
    FileSearchConfig, FileServerConfig, SearchProvider,
};
pub use loader::ConfigLoader;
