//! Run entity and stage state machine

use crate::core::query::Query;
use crate::run::timings::RunTimings;
use crate::run::value_objects::{Answer, Review, Synthesis};
use serde::{Deserialize, Serialize};

/// Stage of a council run
///
/// Advances monotonically through `Idle -> Stage1 -> Stage2 -> Stage3 ->
/// Completed`, or jumps directly to `Failed` from any in-flight stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Idle,
    Stage1,
    Stage2,
    Stage3,
    Completed,
    Failed,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::Stage1 => "stage1",
            Stage::Stage2 => "stage2",
            Stage::Stage3 => "stage3",
            Stage::Completed => "completed",
            Stage::Failed => "failed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Idle => "Idle",
            Stage::Stage1 => "Stage 1: Independent Answers",
            Stage::Stage2 => "Stage 2: Peer Review",
            Stage::Stage3 => "Stage 3: Chairman Synthesis",
            Stage::Completed => "Completed",
            Stage::Failed => "Failed",
        }
    }

    /// Slot index (1-3) for the three remote stages, None otherwise
    pub fn slot(&self) -> Option<usize> {
        match self {
            Stage::Stage1 => Some(1),
            Stage::Stage2 => Some(2),
            Stage::Stage3 => Some(3),
            _ => None,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One end-to-end execution of the pipeline for a single query (Entity)
///
/// Mutated only by the orchestrator as each stage call resolves.
/// Invariants: `answers` is populated iff the run has passed stage 1;
/// `reviews` only once it has passed stage 2; `final_answer` and
/// `chairman_model` only on completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    query: Query,
    stage: Stage,
    answers: Vec<Answer>,
    reviews: Vec<Review>,
    final_answer: Option<String>,
    chairman_model: Option<String>,
    timings: RunTimings,
    error: Option<String>,
}

impl Run {
    /// Create a new idle run for the given query
    pub fn new(query: Query) -> Self {
        Self {
            query,
            stage: Stage::Idle,
            answers: Vec::new(),
            reviews: Vec::new(),
            final_answer: None,
            chairman_model: None,
            timings: RunTimings::default(),
            error: None,
        }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn final_answer(&self) -> Option<&str> {
        self.final_answer.as_deref()
    }

    pub fn chairman_model(&self) -> Option<&str> {
        self.chairman_model.as_deref()
    }

    pub fn timings(&self) -> &RunTimings {
        &self.timings
    }

    pub fn timings_mut(&mut self) -> &mut RunTimings {
        &mut self.timings
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_completed(&self) -> bool {
        self.stage == Stage::Completed
    }

    pub fn is_failed(&self) -> bool {
        self.stage == Stage::Failed
    }

    /// Idle -> Stage1. Marks the run as in flight.
    pub fn begin(&mut self) {
        debug_assert_eq!(self.stage, Stage::Idle);
        self.stage = Stage::Stage1;
    }

    /// Stage1 -> Stage2, storing the council's answers.
    pub fn complete_stage1(&mut self, answers: Vec<Answer>) {
        debug_assert_eq!(self.stage, Stage::Stage1);
        self.answers = answers;
        self.stage = Stage::Stage2;
    }

    /// Stage2 -> Stage3, storing the council's reviews.
    pub fn complete_stage2(&mut self, reviews: Vec<Review>) {
        debug_assert_eq!(self.stage, Stage::Stage2);
        self.reviews = reviews;
        self.stage = Stage::Stage3;
    }

    /// Stage3 -> Completed, storing the chairman's synthesis.
    pub fn complete_stage3(&mut self, synthesis: Synthesis) {
        debug_assert_eq!(self.stage, Stage::Stage3);
        self.final_answer = Some(synthesis.final_answer);
        self.chairman_model = Some(synthesis.chairman_model);
        self.stage = Stage::Completed;
    }

    /// Jump to Failed. Already-populated stage results are retained so the
    /// renderer can still show what the council produced before the failure.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.stage = Stage::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run() -> Run {
        Run::new(Query::try_new("What is Rust?").unwrap())
    }

    #[test]
    fn test_new_run_is_idle() {
        let run = run();
        assert_eq!(run.stage(), Stage::Idle);
        assert!(run.answers().is_empty());
        assert!(run.reviews().is_empty());
        assert!(run.final_answer().is_none());
    }

    #[test]
    fn test_happy_path_transitions() {
        let mut run = run();
        run.begin();
        assert_eq!(run.stage(), Stage::Stage1);

        run.complete_stage1(vec![Answer::new("llama3", "Systems language")]);
        assert_eq!(run.stage(), Stage::Stage2);
        assert_eq!(run.answers().len(), 1);

        run.complete_stage2(vec![Review::new("llama3", "Accurate")]);
        assert_eq!(run.stage(), Stage::Stage3);
        assert_eq!(run.reviews().len(), 1);

        run.complete_stage3(Synthesis::new("qwen", "Rust is a systems language"));
        assert_eq!(run.stage(), Stage::Completed);
        assert_eq!(run.final_answer(), Some("Rust is a systems language"));
        assert_eq!(run.chairman_model(), Some("qwen"));
    }

    #[test]
    fn test_fail_retains_answers() {
        let mut run = run();
        run.begin();
        run.complete_stage1(vec![Answer::new("llama3", "x")]);
        run.fail("Stage 2 failed: HTTP 500");

        assert_eq!(run.stage(), Stage::Failed);
        assert_eq!(run.answers().len(), 1);
        assert!(run.reviews().is_empty());
        assert_eq!(run.error(), Some("Stage 2 failed: HTTP 500"));
    }

    #[test]
    fn test_stage_slots() {
        assert_eq!(Stage::Stage1.slot(), Some(1));
        assert_eq!(Stage::Stage3.slot(), Some(3));
        assert_eq!(Stage::Completed.slot(), None);
    }
}
