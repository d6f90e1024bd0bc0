//! CLI entrypoint for Research Assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use research_application::{DocumentRetriever, RunResearchUseCase, TextGenerator};
use research_domain::{OutputFormat, Query};
use research_infrastructure::{
    ConfigError, ConfigLoader, FileConfig, FileSearchConfig, JsonlResearchLogger,
    OpenAiCompatGenerator, SearchProvider, TavilyRetriever,
};
use research_presentation::{
    Cli, ConsoleFormatter, ProgressReporter, ResearchRepl, SimpleProgress, server,
};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli)?;

    info!("Starting Research Assistant");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Configuration error: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli)?;
    check_config(&config)?;

    if !config.output.color {
        ConsoleFormatter::set_color(false);
    }

    // === Dependency Injection ===
    let research_log = cli
        .research_log
        .clone()
        .or_else(|| config.output.research_log.as_ref().map(PathBuf::from));
    let use_case = build_use_case(&config, research_log.as_deref())?;

    // HTTP mode
    if cli.serve {
        let bind = cli.bind.as_deref().unwrap_or(&config.server.bind);
        server::serve(use_case, bind, &config.server.allowed_origins)
            .await
            .with_context(|| format!("HTTP server on {} failed", bind))?;
        return Ok(());
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    let show_progress = !cli.quiet && config.output.show_progress;

    // Chat mode
    if cli.chat {
        let mut repl = ResearchRepl::new(use_case)
            .with_progress(show_progress)
            .with_format(format);
        repl.run().await?;
        return Ok(());
    }

    // Single query mode - query is required
    let Some(text) = cli.query else {
        bail!("Query is required. Use --chat for interactive mode or --serve for the HTTP API.");
    };
    let query = Query::try_new(text)?;

    let result = if !show_progress {
        use_case.execute(&query).await
    } else if std::io::stderr().is_terminal() {
        use_case
            .execute_with_progress(&query, &ProgressReporter::new())
            .await
    } else {
        use_case.execute_with_progress(&query, &SimpleProgress).await
    };

    println!(
        "{}",
        ConsoleFormatter::render(format, query.content(), &result)
    );

    Ok(())
}

/// Console logs on stderr by verbosity, plus an optional JSON file layer
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let (dir, file_name) = split_log_path(path)?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Cannot create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn split_log_path(path: &Path) -> Result<(PathBuf, String)> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?
        .to_string();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, file_name))
}

/// Command-line flags win over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) -> Result<()> {
    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }
    if let Some(provider) = &cli.provider {
        config.search.provider = provider.parse::<SearchProvider>().map_err(|e| anyhow!(e))?;
    }
    Ok(())
}

/// Log every issue; stop on the first error-level one
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("Configuration error: {}", issue.message);
    }
    Ok(())
}

fn build_use_case(config: &FileConfig, research_log: Option<&Path>) -> Result<RunResearchUseCase> {
    let generator: Arc<dyn TextGenerator> = Arc::new(OpenAiCompatGenerator::from_config(&config.llm)?);
    let retriever = build_retriever(&config.search)?;
    info!(
        provider = retriever.name(),
        model = %config.llm.model,
        "Adapters ready"
    );

    let params = config.research_params();
    params.validate()?;

    let mut use_case = RunResearchUseCase::new(generator, retriever).with_params(params);
    if let Some(path) = research_log
        && let Some(logger) = JsonlResearchLogger::new(path)
    {
        info!(path = %logger.path().display(), "Writing research transcript");
        use_case = use_case.with_logger(Arc::new(logger));
    }
    Ok(use_case)
}

fn build_retriever(
    config: &FileSearchConfig,
) -> std::result::Result<Arc<dyn DocumentRetriever>, ConfigError> {
    match config.provider {
        SearchProvider::Tavily => Ok(Arc::new(TavilyRetriever::from_config(config)?)),
        SearchProvider::DuckDuckGo => build_duckduckgo(config),
    }
}

#[cfg(feature = "duckduckgo")]
fn build_duckduckgo(
    config: &FileSearchConfig,
) -> std::result::Result<Arc<dyn DocumentRetriever>, ConfigError> {
    Ok(Arc::new(research_infrastructure::DuckDuckGoRetriever::new(
        config.timeout_secs,
    )?))
}

#[cfg(not(feature = "duckduckgo"))]
fn build_duckduckgo(
    _config: &FileSearchConfig,
) -> std::result::Result<Arc<dyn DocumentRetriever>, ConfigError> {
    Err(ConfigError::ProviderUnavailable(
        SearchProvider::DuckDuckGo.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_model_and_provider() {
        let cli = Cli::parse_from([
            "research-assistant",
            "--model",
            "openai/gpt-4o",
            "--provider",
            "duckduckgo",
            "q",
        ]);
        let mut config = FileConfig::default();
        apply_cli_overrides(&mut config, &cli).unwrap();
        assert_eq!(config.llm.model, "openai/gpt-4o");
        assert_eq!(config.search.provider, SearchProvider::DuckDuckGo);
    }

    #[test]
    fn test_check_config_rejects_errors_only() {
        let mut config = FileConfig::default();
        config.search.search_depth = "deep".to_string();
        assert!(check_config(&config).is_ok());

        config.research.max_sub_questions = 0;
        assert!(check_config(&config).is_err());
    }

    #[test]
    fn test_check_config_rejects_more_than_three_sub_questions() {
        let mut config = FileConfig::default();
        config.research.max_sub_questions = 5;
        let err = check_config(&config).unwrap_err();
        assert!(err.to_string().contains("research.max_sub_questions"));
    }

    #[test]
    fn test_split_log_path() {
        let (dir, name) = split_log_path(Path::new("logs/research.log")).unwrap();
        assert_eq!(dir, PathBuf::from("logs"));
        assert_eq!(name, "research.log");

        let (dir, _) = split_log_path(Path::new("research.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
    }

    #[test]
    fn test_missing_tavily_key_is_fatal() {
        let mut config = FileSearchConfig::default();
        config.api_key_env = "RESEARCH_TEST_UNSET_TAVILY".to_string();
        assert!(matches!(
            build_retriever(&config),
            Err(ConfigError::MissingCredential { .. })
        ));
    }
}
