//! Wire types for the coordinator's JSON API
//!
//! Field names follow the coordinator exactly; the stage payloads reuse
//! the domain value objects because their serde shapes match the wire.

use council_domain::{Answer, CouncilOutcome, Review};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct Stage1Request<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct Stage1Response {
    #[serde(default)]
    pub answers: Vec<Answer>,
}

#[derive(Debug, Serialize)]
pub struct Stage2Request<'a> {
    pub query: &'a str,
    pub answers: &'a [Answer],
}

#[derive(Debug, Deserialize)]
pub struct Stage2Response {
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Serialize)]
pub struct Stage3Request<'a> {
    pub query: &'a str,
    pub answers: &'a [Answer],
    pub reviews: &'a [Review],
}

#[derive(Debug, Deserialize)]
pub struct Stage3Response {
    pub final_answer: String,
    pub chairman_model: String,
}

/// Response of the legacy `/council` combined endpoint
#[derive(Debug, Deserialize)]
pub struct CouncilResponse {
    pub query: String,
    #[serde(default)]
    pub stage1_answers: Vec<Answer>,
    #[serde(default)]
    pub stage2_reviews: Vec<Review>,
    pub stage3_final: String,
    pub chairman_model: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl From<CouncilResponse> for CouncilOutcome {
    fn from(response: CouncilResponse) -> Self {
        CouncilOutcome {
            query: response.query,
            answers: response.stage1_answers,
            reviews: response.stage2_reviews,
            final_answer: response.stage3_final,
            chairman_model: response.chairman_model,
            errors: response.errors,
        }
    }
}

/// Response of `GET /health`
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub pc1_chairman: String,
    #[serde(default)]
    pub pc2_council: String,
    pub chairman_data: Option<serde_json::Value>,
    pub council_data: Option<serde_json::Value>,
}

/// Error body the coordinator attaches to non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
