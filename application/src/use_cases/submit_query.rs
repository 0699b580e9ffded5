//! Submit Query use case
//!
//! Drives one run through the three-stage council pipeline: independent
//! answers, peer review, chairman synthesis. The stages are strictly
//! sequential because each remote call consumes the output of the one
//! before it; the first failure terminates the run and no later stage
//! is ever attempted. Nothing is retried - a failed run is retried only
//! by a fresh submission.

use crate::ports::council_gateway::{CouncilGateway, GatewayError};
use crate::ports::progress::{NoProgress, RunProgressNotifier};
use crate::state::ClientState;
use council_domain::{Query, Run, Stage};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Errors that reject a submission outright (no run is created)
///
/// Stage failures do not appear here: a run that fails mid-pipeline is
/// still returned, in `Failed` state with its partial results retained.
#[derive(thiserror::Error, Debug)]
pub enum RunError {
    #[error("Please enter a query")]
    EmptyQuery,

    #[error("A run is already in flight")]
    RunInFlight,
}

/// Use case for running a query through the council pipeline
///
/// Holds the single-flight guard: while one run is active, further
/// submissions are rejected with [`RunError::RunInFlight`].
pub struct SubmitQueryUseCase<G: CouncilGateway + 'static> {
    gateway: Arc<G>,
    state: ClientState,
    in_flight: Mutex<()>,
}

impl<G: CouncilGateway + 'static> SubmitQueryUseCase<G> {
    pub fn new(gateway: Arc<G>, state: ClientState) -> Self {
        Self {
            gateway,
            state,
            in_flight: Mutex::new(()),
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, query: &str) -> Result<Run, RunError> {
        self.execute_with_progress(query, &NoProgress).await
    }

    /// Execute the use case with progress callbacks.
    ///
    /// Validation happens before any side effect: an empty query makes no
    /// network call and touches no state. For a valid query the history
    /// entry is recorded immediately, before stage 1, so it exists even
    /// if the run later fails.
    pub async fn execute_with_progress(
        &self,
        query: &str,
        progress: &dyn RunProgressNotifier,
    ) -> Result<Run, RunError> {
        let Some(query) = Query::try_new(query) else {
            return Err(RunError::EmptyQuery);
        };

        let Ok(_guard) = self.in_flight.try_lock() else {
            warn!("Rejecting submission: a run is already in flight");
            return Err(RunError::RunInFlight);
        };

        info!("Starting council run");
        self.state.record_query(query.content());

        let mut run = Run::new(query);
        let total_start = Instant::now();
        run.begin();

        // Stage 1: independent answers
        progress.on_stage_start(Stage::Stage1);
        let stage_start = Instant::now();
        let answers = match self.gateway.stage1(run.query().content()).await {
            Ok(answers) => answers,
            Err(e) => return Ok(Self::fail(run, Stage::Stage1, e, progress)),
        };
        let stage1_ms = stage_start.elapsed().as_millis() as u64;
        info!("Stage 1 complete: {} answers", answers.len());
        run.timings_mut().stage1_ms = Some(stage1_ms);
        run.complete_stage1(answers);
        progress.on_stage_complete(Stage::Stage1, stage1_ms);

        // Stage 2: peer review of the stage-1 answers
        progress.on_stage_start(Stage::Stage2);
        let stage_start = Instant::now();
        let reviews = match self
            .gateway
            .stage2(run.query().content(), run.answers())
            .await
        {
            Ok(reviews) => reviews,
            Err(e) => return Ok(Self::fail(run, Stage::Stage2, e, progress)),
        };
        let stage2_ms = stage_start.elapsed().as_millis() as u64;
        info!("Stage 2 complete: {} reviews", reviews.len());
        run.timings_mut().stage2_ms = Some(stage2_ms);
        run.complete_stage2(reviews);
        progress.on_stage_complete(Stage::Stage2, stage2_ms);

        // Stage 3: chairman synthesis over answers and reviews
        progress.on_stage_start(Stage::Stage3);
        let stage_start = Instant::now();
        let synthesis = match self
            .gateway
            .stage3(run.query().content(), run.answers(), run.reviews())
            .await
        {
            Ok(synthesis) => synthesis,
            Err(e) => return Ok(Self::fail(run, Stage::Stage3, e, progress)),
        };
        let stage3_ms = stage_start.elapsed().as_millis() as u64;
        info!("Stage 3 complete: chairman {}", synthesis.chairman_model);
        run.timings_mut().stage3_ms = Some(stage3_ms);
        run.timings_mut().total_ms = Some(total_start.elapsed().as_millis() as u64);
        run.complete_stage3(synthesis);
        progress.on_stage_complete(Stage::Stage3, stage3_ms);

        progress.on_run_complete(&run);
        Ok(run)
    }

    /// Terminate the run at the failing stage. Prior stage results stay on
    /// the run so the caller can still render them.
    fn fail(
        mut run: Run,
        stage: Stage,
        error: GatewayError,
        progress: &dyn RunProgressNotifier,
    ) -> Run {
        warn!("{} failed: {}", stage.display_name(), error);
        progress.on_run_failed(stage, &error);
        run.fail(format!("{} failed: {}", stage.display_name(), error));
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::state_store::{StateStore, StoreError};
    use council_domain::{Answer, CouncilOutcome, Review, ServiceStatus, Synthesis};
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct MemoryStore {
        values: StdMutex<HashMap<String, String>>,
    }

    impl StateStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Scriptable gateway that counts calls per endpoint
    struct MockGateway {
        stage1_calls: AtomicUsize,
        stage2_calls: AtomicUsize,
        stage3_calls: AtomicUsize,
        fail_stage1: bool,
        fail_stage2: bool,
        fail_stage3: bool,
        stage1_delay: Option<Duration>,
    }

    impl MockGateway {
        fn ok() -> Self {
            Self {
                stage1_calls: AtomicUsize::new(0),
                stage2_calls: AtomicUsize::new(0),
                stage3_calls: AtomicUsize::new(0),
                fail_stage1: false,
                fail_stage2: false,
                fail_stage3: false,
                stage1_delay: None,
            }
        }

        fn failing_at_stage2() -> Self {
            Self {
                fail_stage2: true,
                ..Self::ok()
            }
        }

        fn http_500() -> GatewayError {
            GatewayError::Http {
                status: 500,
                reason: "Internal Server Error".to_string(),
            }
        }
    }

    #[async_trait::async_trait]
    impl CouncilGateway for MockGateway {
        async fn stage1(&self, _query: &str) -> Result<Vec<Answer>, GatewayError> {
            self.stage1_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.stage1_delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail_stage1 {
                return Err(Self::http_500());
            }
            Ok(vec![Answer::new("A", "x")])
        }

        async fn stage2(
            &self,
            _query: &str,
            _answers: &[Answer],
        ) -> Result<Vec<Review>, GatewayError> {
            self.stage2_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_stage2 {
                return Err(Self::http_500());
            }
            Ok(vec![Review::new("A", "ok")])
        }

        async fn stage3(
            &self,
            _query: &str,
            _answers: &[Answer],
            _reviews: &[Review],
        ) -> Result<Synthesis, GatewayError> {
            self.stage3_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_stage3 {
                return Err(Self::http_500());
            }
            Ok(Synthesis::new("C", "Y"))
        }

        async fn council(&self, _query: &str) -> Result<CouncilOutcome, GatewayError> {
            unimplemented!("not exercised by these tests")
        }

        async fn health(&self) -> Result<ServiceStatus, GatewayError> {
            unimplemented!("not exercised by these tests")
        }

        async fn fetch_config(&self) -> Result<serde_json::Value, GatewayError> {
            unimplemented!("not exercised by these tests")
        }
    }

    fn use_case(gateway: MockGateway) -> (SubmitQueryUseCase<MockGateway>, Arc<MockGateway>) {
        let gateway = Arc::new(gateway);
        let state = ClientState::new(Arc::new(MemoryStore::default()));
        (
            SubmitQueryUseCase::new(Arc::clone(&gateway), state),
            gateway,
        )
    }

    #[tokio::test]
    async fn test_happy_path_completes_run() {
        let (use_case, _) = use_case(MockGateway::ok());

        let run = use_case.execute("What is Rust?").await.unwrap();

        assert_eq!(run.stage(), Stage::Completed);
        assert_eq!(run.answers().len(), 1);
        assert_eq!(run.reviews().len(), 1);
        assert_eq!(run.final_answer(), Some("Y"));
        assert_eq!(run.chairman_model(), Some("C"));
        assert!(run.timings().is_complete());
    }

    #[tokio::test]
    async fn test_whitespace_query_makes_no_network_call() {
        let (use_case, gateway) = use_case(MockGateway::ok());

        let result = use_case.execute("  ").await;

        assert!(matches!(result, Err(RunError::EmptyQuery)));
        assert_eq!(gateway.stage1_calls.load(Ordering::SeqCst), 0);
        assert_eq!(gateway.stage2_calls.load(Ordering::SeqCst), 0);
        assert_eq!(gateway.stage3_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_stage2_failure_never_calls_stage3() {
        let (use_case, gateway) = use_case(MockGateway::failing_at_stage2());

        let run = use_case.execute("What is Rust?").await.unwrap();

        assert_eq!(run.stage(), Stage::Failed);
        // Answers from stage 1 are retained, reviews stay empty
        assert_eq!(run.answers().len(), 1);
        assert!(run.reviews().is_empty());
        assert_eq!(gateway.stage3_calls.load(Ordering::SeqCst), 0);
        assert!(run.error().unwrap().contains("Stage 2"));
        assert!(run.error().unwrap().contains("500"));
    }

    #[tokio::test]
    async fn test_stage1_failure_leaves_everything_empty() {
        let (use_case, gateway) = use_case(MockGateway {
            fail_stage1: true,
            ..MockGateway::ok()
        });

        let run = use_case.execute("q").await.unwrap();

        assert_eq!(run.stage(), Stage::Failed);
        assert!(run.answers().is_empty());
        assert_eq!(gateway.stage2_calls.load(Ordering::SeqCst), 0);
        assert_eq!(gateway.stage3_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_stage3_failure_retains_reviews() {
        let (use_case, _) = use_case(MockGateway {
            fail_stage3: true,
            ..MockGateway::ok()
        });

        let run = use_case.execute("q").await.unwrap();

        assert_eq!(run.stage(), Stage::Failed);
        assert_eq!(run.answers().len(), 1);
        assert_eq!(run.reviews().len(), 1);
        assert!(run.final_answer().is_none());
    }

    #[tokio::test]
    async fn test_history_recorded_even_when_run_fails() {
        let store = Arc::new(MemoryStore::default());
        let state = ClientState::new(Arc::clone(&store) as Arc<dyn StateStore>);
        let use_case =
            SubmitQueryUseCase::new(Arc::new(MockGateway::failing_at_stage2()), state.clone());

        use_case.execute("doomed query").await.unwrap();

        let history = state.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history.entries()[0].query, "doomed query");
    }

    #[tokio::test]
    async fn test_history_bounded_across_submissions() {
        let store = Arc::new(MemoryStore::default());
        let state = ClientState::new(Arc::clone(&store) as Arc<dyn StateStore>);
        let use_case = SubmitQueryUseCase::new(Arc::new(MockGateway::ok()), state.clone());

        for i in 0..15 {
            use_case.execute(&format!("query {}", i)).await.unwrap();
        }

        assert_eq!(state.history().len(), 10);
        assert_eq!(state.history().entries()[0].query, "query 14");
    }

    #[tokio::test]
    async fn test_second_submission_rejected_while_in_flight() {
        let gateway = Arc::new(MockGateway {
            stage1_delay: Some(Duration::from_millis(50)),
            ..MockGateway::ok()
        });
        let state = ClientState::new(Arc::new(MemoryStore::default()));
        let use_case = Arc::new(SubmitQueryUseCase::new(Arc::clone(&gateway), state));

        let first = {
            let use_case = Arc::clone(&use_case);
            tokio::spawn(async move { use_case.execute("first").await })
        };

        // Let the first submission reach its stage-1 call
        tokio::time::sleep(Duration::from_millis(10)).await;

        let second = use_case.execute("second").await;
        assert!(matches!(second, Err(RunError::RunInFlight)));

        let run = first.await.unwrap().unwrap();
        assert_eq!(run.stage(), Stage::Completed);
        assert_eq!(gateway.stage1_calls.load(Ordering::SeqCst), 1);
    }
}
