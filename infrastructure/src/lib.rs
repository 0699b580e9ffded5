//! Infrastructure layer for llm-council
//!
//! This crate contains the adapters behind the application ports:
//! the HTTP gateway to the council coordinator, the JSON-file state
//! store, and configuration file loading.

pub mod config;
pub mod http;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileServerConfig};
pub use http::HttpCouncilGateway;
pub use store::JsonFileStore;
