//! Error types for the dayplan ecosystem.

use thiserror::Error;

/// Errors that can occur in dayplan operations.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    NotFound(uuid::Uuid),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Recurrence error: {0}")]
    Recurrence(String),
}

/// Result type alias for dayplan operations.
pub type PlanResult<T> = Result<T, PlanError>;
