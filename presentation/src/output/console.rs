//! Console output formatter for research results

use colored::Colorize;
use research_domain::{Document, OutputFormat, ResearchResult};

/// Formats research results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable ANSI colors for everything this crate prints
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Render `result` in the requested format
    pub fn render(format: OutputFormat, query: &str, result: &ResearchResult) -> String {
        match format {
            OutputFormat::Full => Self::format(query, result),
            OutputFormat::Answer => Self::format_answer_only(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Format the answer followed by the numbered source list
    pub fn format(query: &str, result: &ResearchResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Research Results"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), query));

        output.push_str(&Self::section_header("Answer"));
        output.push('\n');
        output.push_str(&result.answer);
        output.push('\n');

        output.push_str(&Self::section_header(&format!(
            "Sources ({})",
            result.source_count()
        )));
        output.push_str(&Self::format_sources(&result.sources));

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON (`{"answer": ..., "sources": [...]}`)
    pub fn format_json(result: &ResearchResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format only the answer text
    pub fn format_answer_only(result: &ResearchResult) -> String {
        format!("{}\n", result.answer)
    }

    /// Numbered source list, one entry per document
    pub fn format_sources(sources: &[Document]) -> String {
        if sources.is_empty() {
            return format!("\n{}\n", "No sources.".dimmed());
        }

        let mut output = String::from("\n");
        for (i, doc) in sources.iter().enumerate() {
            let title = if doc.title.trim().is_empty() {
                "(untitled)"
            } else {
                doc.title.as_str()
            };
            output.push_str(&format!(
                "{} {}\n    {}\n",
                format!("[{}]", i + 1).yellow().bold(),
                title,
                doc.url.dimmed()
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
