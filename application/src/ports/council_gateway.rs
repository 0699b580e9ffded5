//! Council gateway port
//!
//! Defines the interface for communicating with the council coordinator
//! service. The HTTP adapter lives in the infrastructure layer.

use async_trait::async_trait;
use council_domain::{Answer, CouncilOutcome, Review, ServiceStatus, Synthesis};
use thiserror::Error;

/// Errors that can occur during gateway operations
///
/// Any of these is a stage failure when raised from a stage call: the
/// run terminates and later stages are never attempted.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Gateway to the council coordinator service
///
/// One method per remote endpoint. Stage methods take the accumulated
/// outputs of the prior stages, mirroring the wire contract.
#[async_trait]
pub trait CouncilGateway: Send + Sync {
    /// `POST /stage1` - council models answer the query independently
    async fn stage1(&self, query: &str) -> Result<Vec<Answer>, GatewayError>;

    /// `POST /stage2` - council models review and rank the answers
    async fn stage2(&self, query: &str, answers: &[Answer]) -> Result<Vec<Review>, GatewayError>;

    /// `POST /stage3` - chairman synthesizes the final answer
    async fn stage3(
        &self,
        query: &str,
        answers: &[Answer],
        reviews: &[Review],
    ) -> Result<Synthesis, GatewayError>;

    /// `POST /council` - legacy single call running all stages server-side
    async fn council(&self, query: &str) -> Result<CouncilOutcome, GatewayError>;

    /// `GET /health` - poll subsystem health
    async fn health(&self) -> Result<ServiceStatus, GatewayError>;

    /// `GET /config` - opaque configuration metadata, informational only
    async fn fetch_config(&self) -> Result<serde_json::Value, GatewayError>;
}
