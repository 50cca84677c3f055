//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identity provider not configured. Callers degrade to anonymous.
    #[error("Auth gateway unavailable: {0}")]
    AuthUnavailable(String),

    /// Transient transport failure. No automatic retry.
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Access to entity denied: {0}")]
    EntityForbidden(String),

    #[error("Timed out after {millis} ms")]
    Timeout { millis: u64 },

    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    /// True for the degrade-silently case, as opposed to a real failure.
    pub fn is_auth_unavailable(&self) -> bool {
        matches!(self, DomainError::AuthUnavailable(_))
    }
}
