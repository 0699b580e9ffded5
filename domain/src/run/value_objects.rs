//! Run value objects - immutable result types for the pipeline stages.
//!
//! These types represent the outputs of each stage:
//! - [`Answer`] - One council model's independent answer (stage 1)
//! - [`Review`] - One council model's review of the answers (stage 2)
//! - [`Synthesis`] - The chairman's final combined answer (stage 3)
//! - [`CouncilOutcome`] - Complete payload of the legacy single-call endpoint

use serde::{Deserialize, Serialize};

/// Independent answer from a single council model (stage 1)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The model that generated this answer
    pub model: String,
    /// The answer text
    pub response: String,
}

impl Answer {
    pub fn new(model: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            response: response.into(),
        }
    }
}

/// Review of the stage-1 answers by one council model (stage 2)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// The model that performed the review
    pub reviewer: String,
    /// The review text; the council server may omit it
    #[serde(default)]
    pub review_text: String,
}

impl Review {
    pub fn new(reviewer: impl Into<String>, review_text: impl Into<String>) -> Self {
        Self {
            reviewer: reviewer.into(),
            review_text: review_text.into(),
        }
    }

    /// Review text with a placeholder for servers that omit it
    pub fn text(&self) -> &str {
        if self.review_text.is_empty() {
            "No review text available"
        } else {
            &self.review_text
        }
    }
}

/// Final synthesis from the chairman model (stage 3)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synthesis {
    /// The model that performed the synthesis
    pub chairman_model: String,
    /// The synthesized final answer
    pub final_answer: String,
}

impl Synthesis {
    pub fn new(chairman_model: impl Into<String>, final_answer: impl Into<String>) -> Self {
        Self {
            chairman_model: chairman_model.into(),
            final_answer: final_answer.into(),
        }
    }
}

/// Complete result of the legacy `/council` single-call endpoint
///
/// The combined endpoint runs all three stages server-side and returns
/// everything at once, including per-stage errors it chose to tolerate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouncilOutcome {
    pub query: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    pub final_answer: String,
    pub chairman_model: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_text_placeholder() {
        let review = Review::new("llama3", "");
        assert_eq!(review.text(), "No review text available");

        let review = Review::new("llama3", "Answer A is best");
        assert_eq!(review.text(), "Answer A is best");
    }

    #[test]
    fn test_answer_roundtrip() {
        let answer = Answer::new("mistral", "Paris");
        let json = serde_json::to_string(&answer).unwrap();
        let back: Answer = serde_json::from_str(&json).unwrap();
        assert_eq!(back.model, "mistral");
        assert_eq!(back.response, "Paris");
    }
}
