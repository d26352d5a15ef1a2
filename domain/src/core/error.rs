//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid taste: {0}")]
    InvalidTaste(String),

    #[error("Unknown trip phase: {0}")]
    UnknownPhase(String),

    #[error("Invalid trip: {0}")]
    InvalidTrip(String),

    #[error("Invalid feedback: {0}")]
    InvalidFeedback(String),
}
