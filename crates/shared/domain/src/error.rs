//! Domain-level errors.
//!
//! These errors represent failed lookups and rejected updates on the user collection.
//! They are independent of infrastructure concerns (HTTP, storage).

use thiserror::Error;

use crate::user::UserId;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// No user carries the requested id
    #[error("User {0} not found")]
    NotFound(UserId),

    /// Input would leave a record in an unrepresentable state
    #[error("{0}")]
    Validation(String),
}

impl DomainError {
    /// Create a not found error
    pub fn not_found(id: UserId) -> Self {
        DomainError::NotFound(id)
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
