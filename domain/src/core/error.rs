//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Invalid stage transition: {0}")]
    InvalidTransition(String),

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),
}
