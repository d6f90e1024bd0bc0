//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl DomainError {
    /// Check if this error was caused by user input rather than configuration
    pub fn is_user_error(&self) -> bool {
        matches!(self, DomainError::EmptyQuery)
    }
}
