//! Application layer for llm-council
//!
//! This crate contains use cases, port definitions, and the client state
//! service. It depends only on the domain layer.

pub mod ports;
pub mod state;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    council_gateway::{CouncilGateway, GatewayError},
    progress::{NoProgress, RunProgressNotifier},
    state_store::{StateStore, StoreError},
};
pub use state::ClientState;
pub use use_cases::check_health::CheckHealthUseCase;
pub use use_cases::submit_query::{RunError, SubmitQueryUseCase};
