//! Run progress notification port
//!
//! Defines the interface for reporting stage transitions during a run.
//! Implementations live in the presentation layer. Events fire at true
//! stage boundaries only; there is no interpolated progress.

use council_domain::{Run, Stage};

use super::council_gateway::GatewayError;

/// Callback for stage transitions during a run
pub trait RunProgressNotifier: Send + Sync {
    /// Called when a remote stage call is issued
    fn on_stage_start(&self, stage: Stage);

    /// Called when a remote stage call resolves successfully
    fn on_stage_complete(&self, stage: Stage, elapsed_ms: u64);

    /// Called once after stage 3 completes; the run carries all timings
    fn on_run_complete(&self, run: &Run);

    /// Called when a stage fails; no later stage will be attempted
    fn on_run_failed(&self, stage: Stage, error: &GatewayError);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RunProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage) {}
    fn on_stage_complete(&self, _stage: Stage, _elapsed_ms: u64) {}
    fn on_run_complete(&self, _run: &Run) {}
    fn on_run_failed(&self, _stage: Stage, _error: &GatewayError) {}
}
