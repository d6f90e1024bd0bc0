//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for research results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Answer followed by the numbered source list
    Full,
    /// Only the answer text
    Answer,
    /// JSON output
    Json,
}

impl From<OutputFormat> for research_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => research_domain::OutputFormat::Full,
            OutputFormat::Answer => research_domain::OutputFormat::Answer,
            OutputFormat::Json => research_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for research-assistant
#[derive(Parser, Debug)]
#[command(name = "research-assistant")]
#[command(author, version, about = "Answer questions with cited web sources")]
#[command(long_about = r#"
Research Assistant answers a question by researching it on the web.

The process has three phases:
1. Decomposition: the question is split into focused sub-questions
2. Retrieval: every sub-question is searched in parallel
3. Synthesis: the collected sources are combined into a cited answer

Configuration files are loaded from (in priority order):
1. RESEARCH_<SECTION>__<KEY>   Environment variables
2. --config <path>             Explicit config file
3. ./research.toml             Project-level config
4. ~/.config/research-assistant/config.toml   Global config

Credentials come from OPENROUTER_API_KEY and TAVILY_API_KEY (a .env file
in the working directory is read too).

Example:
  research-assistant "How do solid-state batteries work?"
  research-assistant -o json "Summarize https://www.rust-lang.org"
  research-assistant --chat
  research-assistant --serve --bind 127.0.0.1:8000
"#)]
pub struct Cli {
    /// The question to research (not required in chat or serve mode)
    pub query: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long, conflicts_with = "serve")]
    pub chat: bool,

    /// Serve the HTTP API instead of answering a single question
    #[arg(long)]
    pub serve: bool,

    /// Address for the HTTP API (overrides [server] bind)
    #[arg(long, value_name = "ADDR", requires = "serve")]
    pub bind: Option<String>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Document retriever (overrides [search] provider)
    #[arg(long, value_name = "PROVIDER", value_parser = ["tavily", "duckduckgo"])]
    pub provider: Option<String>,

    /// Model identifier (overrides [llm] model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Also write diagnostic logs as JSON lines to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append a JSONL transcript of each research run to this file
    #[arg(long, value_name = "PATH")]
    pub research_log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot_query() {
        let cli = Cli::try_parse_from(["research-assistant", "-vv", "-o", "json", "What is Rust?"])
            .unwrap();
        assert_eq!(cli.query.as_deref(), Some("What is Rust?"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.chat);
    }

    #[test]
    fn test_chat_and_serve_conflict() {
        assert!(Cli::try_parse_from(["research-assistant", "--chat", "--serve"]).is_err());
    }

    #[test]
    fn test_bind_requires_serve() {
        assert!(Cli::try_parse_from(["research-assistant", "--bind", "0.0.0.0:1"]).is_err());
        let cli =
            Cli::try_parse_from(["research-assistant", "--serve", "--bind", "0.0.0.0:1"]).unwrap();
        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:1"));
    }

    #[test]
    fn test_provider_is_restricted() {
        assert!(Cli::try_parse_from(["research-assistant", "--provider", "bing", "q"]).is_err());
        let cli = Cli::try_parse_from(["research-assistant", "--provider", "duckduckgo", "q"])
            .unwrap();
        assert_eq!(cli.provider.as_deref(), Some("duckduckgo"));
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            research_domain::OutputFormat::from(OutputFormat::Answer),
            research_domain::OutputFormat::Answer
        );
    }
}
