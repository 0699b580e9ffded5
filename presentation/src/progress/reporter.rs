//! Progress reporting for council runs

use crate::progress::board::StageBoard;
use colored::Colorize;
use council_application::ports::council_gateway::GatewayError;
use council_application::ports::progress::RunProgressNotifier;
use council_domain::{Run, Stage};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Line shown when a stage finishes. Timing stays out of it; the
/// elapsed figures appear together in the results panel once the whole
/// run has completed, and never for a failed run.
fn completion_line(stage: Stage) -> String {
    stage.display_name().green().to_string()
}

/// Reports run progress with a spinner per stage
///
/// Driven purely by stage-boundary events from the orchestrator; there
/// is no interpolated or time-based progression.
pub struct StageReporter {
    board: Mutex<StageBoard>,
    spinner: Mutex<Option<ProgressBar>>,
}

impl StageReporter {
    pub fn new() -> Self {
        Self {
            board: Mutex::new(StageBoard::new()),
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap()
    }
}

impl Default for StageReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunProgressNotifier for StageReporter {
    fn on_stage_start(&self, stage: Stage) {
        let strip = {
            let mut board = self.board.lock().unwrap();
            board.start(stage);
            board.strip()
        };

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(strip);
        pb.set_message(stage.display_name().to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.lock().unwrap() = Some(pb);
    }

    fn on_stage_complete(&self, stage: Stage, _elapsed_ms: u64) {
        let strip = {
            let mut board = self.board.lock().unwrap();
            board.finish(stage);
            board.strip()
        };

        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.set_prefix(strip);
            pb.finish_with_message(completion_line(stage));
        }
    }

    fn on_run_complete(&self, _run: &Run) {
        println!("{}", "All stages completed!".green().bold());
    }

    fn on_run_failed(&self, stage: Stage, error: &GatewayError) {
        self.board.lock().unwrap().freeze();

        if let Some(pb) = self.spinner.lock().unwrap().take() {
            pb.abandon_with_message(format!(
                "{} {}",
                format!("{} failed:", stage.display_name()).red().bold(),
                error
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl RunProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage) {
        println!("{} {}", "->".cyan(), stage.display_name().bold());
    }

    fn on_stage_complete(&self, stage: Stage, _elapsed_ms: u64) {
        println!("  {} {}", "v".green(), stage.display_name());
    }

    fn on_run_complete(&self, _run: &Run) {
        println!("{}", "All stages completed!".green());
    }

    fn on_run_failed(&self, stage: Stage, error: &GatewayError) {
        println!("  {} {} ({})", "x".red(), stage.display_name(), error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_line_is_name_only() {
        colored::control::set_override(false);

        let line = completion_line(Stage::Stage2);
        assert_eq!(line, "Stage 2: Peer Review");
        assert!(!line.contains("ms"));
        assert!(!line.contains('('));
    }
}
