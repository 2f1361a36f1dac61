// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by entities, value objects and repository ports.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    /// A uniqueness rule was violated by the store. Callers may retry.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Raised when two writers raced past the slug uniqueness check and the
    /// storage constraint rejected the second one.
    pub fn slug_collision() -> Self {
        Self::Conflict("slug collision, please retry".into())
    }

    pub fn email_taken() -> Self {
        Self::Conflict("email already in use".into())
    }
}
