//! HTTP implementation of the council gateway port

use crate::http::protocol::{
    CouncilResponse, ErrorBody, HealthResponse, Stage1Request, Stage1Response, Stage2Request,
    Stage2Response, Stage3Request, Stage3Response,
};
use async_trait::async_trait;
use council_application::ports::council_gateway::{CouncilGateway, GatewayError};
use council_domain::{Answer, CouncilOutcome, HealthState, Review, ServiceStatus, Synthesis};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Council LLMs can take minutes per stage; these match the coordinator's
/// own upstream timeouts.
const STAGE_TIMEOUT: Duration = Duration::from_secs(180);
const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(300);
/// The combined endpoint runs all three stages in one request
const COUNCIL_TIMEOUT: Duration = Duration::from_secs(600);
const STATUS_TIMEOUT: Duration = Duration::from_secs(5);

/// Gateway to the council coordinator over HTTP/JSON
pub struct HttpCouncilGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCouncilGateway {
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("llm-council/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize + Sync, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<R, GatewayError> {
        debug!("POST {}", path);
        let response = self
            .client
            .post(self.url(path))
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    async fn get_json<R: DeserializeOwned>(
        &self,
        path: &str,
        timeout: Duration,
    ) -> Result<R, GatewayError> {
        debug!("GET {}", path);
        let response = self
            .client
            .get(self.url(path))
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            // The coordinator attaches {"error": "..."} bodies; fall back
            // to the canonical reason when it doesn't.
            let reason = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.canonical_reason().unwrap_or("Unknown").to_string(),
            };
            return Err(GatewayError::Http {
                status: status.as_u16(),
                reason,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CouncilGateway for HttpCouncilGateway {
    async fn stage1(&self, query: &str) -> Result<Vec<Answer>, GatewayError> {
        let response: Stage1Response = self
            .post_json("/stage1", &Stage1Request { query }, STAGE_TIMEOUT)
            .await?;
        Ok(response.answers)
    }

    async fn stage2(&self, query: &str, answers: &[Answer]) -> Result<Vec<Review>, GatewayError> {
        let response: Stage2Response = self
            .post_json("/stage2", &Stage2Request { query, answers }, STAGE_TIMEOUT)
            .await?;
        Ok(response.reviews)
    }

    async fn stage3(
        &self,
        query: &str,
        answers: &[Answer],
        reviews: &[Review],
    ) -> Result<Synthesis, GatewayError> {
        let response: Stage3Response = self
            .post_json(
                "/stage3",
                &Stage3Request {
                    query,
                    answers,
                    reviews,
                },
                SYNTHESIS_TIMEOUT,
            )
            .await?;
        Ok(Synthesis::new(response.chairman_model, response.final_answer))
    }

    async fn council(&self, query: &str) -> Result<CouncilOutcome, GatewayError> {
        let response: CouncilResponse = self
            .post_json("/council", &Stage1Request { query }, COUNCIL_TIMEOUT)
            .await?;
        Ok(response.into())
    }

    async fn health(&self) -> Result<ServiceStatus, GatewayError> {
        let response: HealthResponse = self.get_json("/health", STATUS_TIMEOUT).await?;
        Ok(ServiceStatus {
            pc1_chairman: HealthState::from_wire(&response.pc1_chairman),
            pc2_council: HealthState::from_wire(&response.pc2_council),
            chairman_meta: response.chairman_data,
            council_meta: response.council_data,
        })
    }

    async fn fetch_config(&self) -> Result<serde_json::Value, GatewayError> {
        self.get_json("/config", STATUS_TIMEOUT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let gateway = HttpCouncilGateway::new("http://localhost:5000/").unwrap();
        assert_eq!(gateway.base_url(), "http://localhost:5000");
        assert_eq!(gateway.url("/stage1"), "http://localhost:5000/stage1");
    }
}
