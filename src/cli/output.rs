//! Output formatting and progress indicators
//!
//! Utilities for displaying progress, status prefixes, and run summaries.

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

use crate::core::matrix::Stage;
use crate::core::runner::RunReport;
use crate::core::target::TargetId;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Step prefix (arrow)
    pub const STEP: &str = "▶";
}

/// Create a spinner for operations with unknown duration
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Output configuration derived from global CLI flags
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress all output except errors
    pub quiet: bool,
    /// Emit machine-readable JSON instead of human-readable text
    pub json: bool,
}

impl OutputConfig {
    /// Create an output configuration
    pub fn new(quiet: bool, json: bool) -> Self {
        Self { quiet, json }
    }

    /// Announce a pipeline step about to run.
    ///
    /// Suppressed in quiet and JSON modes; scripted consumers get the
    /// summary line only.
    pub fn step(&self, target: TargetId, stage: Stage) {
        if !self.quiet && !self.json {
            println!("{} [{target}] {stage}", status::STEP);
        }
    }

    /// Print the summary of a successful run
    pub fn summary(&self, action: &str, report: &RunReport) {
        if self.json {
            let payload = json!({
                "status": "ok",
                "action": action,
                "steps_run": report.steps_run,
                "targets_succeeded": report.targets_succeeded,
            });
            println!("{payload}");
        } else if !self.quiet {
            println!(
                "{} {action} complete: {} steps across {} targets",
                status::SUCCESS, report.steps_run, report.targets_succeeded
            );
        }
    }

    /// Print an error with its cause chain
    pub fn error(&self, err: &anyhow::Error) {
        if self.json {
            let payload = json!({
                "status": "error",
                "message": format!("{err:#}"),
            });
            eprintln!("{payload}");
        } else {
            eprintln!("{} Error: {err:#}", status::ERROR);
        }
    }
}
