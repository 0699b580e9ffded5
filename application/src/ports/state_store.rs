//! Persistent client state port
//!
//! A string-keyed key/value store that survives process restarts.
//! Modeled after the browser's local storage: reads are tolerant
//! (absent data is simply absent, never an error), writes persist
//! immediately. The file-backed adapter lives in infrastructure.

use thiserror::Error;

/// Errors that can occur when persisting state
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable string-keyed key/value storage
pub trait StateStore: Send + Sync {
    /// Read a value; `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, persisting immediately
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
