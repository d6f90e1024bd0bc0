//! Progress reporting for research runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use research_application::ports::progress::ProgressNotifier;
use research_domain::Phase;
use research_domain::core::string::truncate;
use std::sync::Mutex;

/// Longest task label shown next to a bar
const LABEL_WIDTH: usize = 50;

/// Reports progress during a research run with progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_label(phase: &Phase) -> String {
        match phase {
            Phase::Decomposing => format!("Phase 1: {}", phase.display_name()),
            Phase::Retrieving => format!("Phase 2: {}", phase.display_name()),
            Phase::Synthesizing => format!("Phase 3: {}", phase.display_name()),
            Phase::Done => phase.display_name().to_string(),
        }
    }

    fn task_status(label: &str, success: bool) -> String {
        let label = truncate(label, LABEL_WIDTH);
        if success {
            format!("{} {}", "v".green(), label)
        } else {
            format!("{} {}", "x".red(), label)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_label(phase));
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_complete(&self, _phase: &Phase, label: &str, success: bool) {
        if let Ok(slot) = self.phase_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(Self::task_status(label, success));
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &Phase) {
        if let Ok(mut slot) = self.phase_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} complete!", phase.display_name().green()));
        }
    }
}

/// Simple line-based progress on stderr (no bars)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::phase_label(phase).bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _phase: &Phase, label: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), truncate(label, LABEL_WIDTH));
        } else {
            eprintln!("  {} {} (failed)", "x".red(), truncate(label, LABEL_WIDTH));
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        eprintln!();
    }
}
