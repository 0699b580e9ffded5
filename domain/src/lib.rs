//! Domain layer for llm-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Council
//!
//! A council of LLMs answers a query in three sequential stages:
//!
//! - **Stage 1**: every council model produces an independent answer
//! - **Stage 2**: the council reviews and ranks those answers
//! - **Stage 3**: the chairman model synthesizes a final answer
//!
//! ## Run
//!
//! One end-to-end execution of the three-stage pipeline for a single query.
//! A run advances monotonically through the stages or jumps to `Failed`;
//! it never moves backwards and never skips a stage on the success path.

pub mod core;
pub mod history;
pub mod run;
pub mod status;
pub mod theme;

// Re-export commonly used types
pub use crate::core::{error::DomainError, query::Query};
pub use history::{HISTORY_LIMIT, HistoryEntry, QueryHistory};
pub use run::{
    entities::{Run, Stage},
    timings::{RunTimings, format_elapsed},
    value_objects::{Answer, CouncilOutcome, Review, Synthesis},
};
pub use status::{HealthState, ServiceStatus};
pub use theme::Theme;
