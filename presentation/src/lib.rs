//! Presentation layer for research-assistant
//!
//! This crate contains CLI definitions, output formatters, progress
//! reporters, the interactive chat interface and the HTTP API.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use chat::ResearchRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
