//! Progress notification port
//!
//! Defines the interface for reporting progress during a research run.

use research_domain::Phase;

/// Callback for progress updates during a research run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, progress bars, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when a task completes within a phase.
    ///
    /// `label` identifies the task (a sub-question during retrieval).
    fn on_task_complete(&self, phase: &Phase, label: &str, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: &Phase, _label: &str, _success: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
