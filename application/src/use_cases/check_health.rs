//! Check Health use case
//!
//! One poll of the coordinator's health endpoint. Failures never
//! propagate to the caller: a failed poll is itself a health signal
//! and degrades both subsystems to `Error`.

use crate::ports::council_gateway::CouncilGateway;
use council_domain::ServiceStatus;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct CheckHealthUseCase<G: CouncilGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: CouncilGateway + 'static> CheckHealthUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Poll once; absorbs any gateway error into a degraded status
    pub async fn execute(&self) -> ServiceStatus {
        match self.gateway.health().await {
            Ok(status) => status,
            Err(e) => {
                warn!("Health check failed: {}", e);
                ServiceStatus::degraded()
            }
        }
    }

    /// Fetch the informational config blob, logging it at debug level.
    ///
    /// Returns `None` on any failure; configuration metadata is purely
    /// informational and a failed fetch is not an error condition.
    pub async fn fetch_config(&self) -> Option<serde_json::Value> {
        match self.gateway.fetch_config().await {
            Ok(config) => {
                debug!("Service configuration: {}", config);
                Some(config)
            }
            Err(e) => {
                debug!("Could not load service configuration: {}", e);
                None
            }
        }
    }
}
