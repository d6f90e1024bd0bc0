//! REPL (Read-Eval-Print Loop) for interactive research

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use research_application::RunResearchUseCase;
use research_domain::{OutputFormat, Query, ResearchResult};
use std::path::PathBuf;

const HISTORY_CAPACITY: usize = 1000;

/// What the loop should do after a slash command
#[derive(Debug, PartialEq, Eq)]
enum CommandOutcome {
    Continue,
    Exit,
}

/// Interactive research REPL
pub struct ResearchRepl {
    use_case: RunResearchUseCase,
    format: OutputFormat,
    show_progress: bool,
    last_result: Option<ResearchResult>,
}

impl ResearchRepl {
    pub fn new(use_case: RunResearchUseCase) -> Self {
        Self {
            use_case,
            format: OutputFormat::Full,
            show_progress: true,
            last_result: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    fn history_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("research-assistant").join("history.txt"))
    }

    fn line_editor() -> Reedline {
        let editor = Reedline::create();
        let Some(path) = Self::history_path() else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                tracing::debug!("History disabled: {}", e);
                editor
            }
        }
    }

    /// Run the interactive REPL until `/quit` or end of input
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Self::line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("research".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) == CommandOutcome::Exit {
                            break;
                        }
                        continue;
                    }

                    self.process_query(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Research Assistant - Chat Mode        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Ask a question, or paste a URL to summarize it.");
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /sources          - Show sources of the last answer");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    fn handle_command(&self, cmd: &str) -> CommandOutcome {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                CommandOutcome::Exit
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_help();
                CommandOutcome::Continue
            }
            "/sources" => {
                match &self.last_result {
                    Some(result) => print!("{}", ConsoleFormatter::format_sources(&result.sources)),
                    None => println!("No research yet."),
                }
                println!();
                CommandOutcome::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandOutcome::Continue
            }
        }
    }

    async fn process_query(&mut self, line: &str) {
        let Ok(query) = Query::try_new(line) else {
            return;
        };
        println!();

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(&query, &progress).await
        } else {
            self.use_case.execute(&query).await
        };

        println!(
            "{}",
            ConsoleFormatter::render(self.format, query.content(), &result)
        );
        self.last_result = Some(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use research_application::{
        DocumentRetriever, GenerationError, RetrievalError, TextGenerator,
    };
    use research_domain::Document;
    use std::sync::Arc;

    struct Echo;

    #[async_trait]
    impl TextGenerator for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            Ok("answer".to_string())
        }
    }

    struct OneDoc;

    #[async_trait]
    impl DocumentRetriever for OneDoc {
        fn name(&self) -> &str {
            "one"
        }

        async fn search(
            &self,
            _query: &str,
            _max_results: usize,
        ) -> Result<Vec<Document>, RetrievalError> {
            Ok(vec![Document::new("https://a.com", "A", "text")])
        }
    }

    fn repl() -> ResearchRepl {
        ResearchRepl::new(RunResearchUseCase::new(Arc::new(Echo), Arc::new(OneDoc)))
            .with_progress(false)
    }

    #[test]
    fn test_quit_commands_exit() {
        let repl = repl();
        for cmd in ["/quit", "/exit", "/q"] {
            assert_eq!(repl.handle_command(cmd), CommandOutcome::Exit);
        }
    }

    #[test]
    fn test_other_commands_continue() {
        let repl = repl();
        for cmd in ["/help", "/sources", "/nope"] {
            assert_eq!(repl.handle_command(cmd), CommandOutcome::Continue);
        }
    }

    #[tokio::test]
    async fn test_process_query_remembers_result() {
        let mut repl = repl().with_format(OutputFormat::Answer);
        repl.process_query("What is A?").await;

        let result = repl.last_result.as_ref().unwrap();
        assert_eq!(result.answer, "answer");
        assert_eq!(result.sources.len(), 1);
    }
}
