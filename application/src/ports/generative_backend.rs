//! Generative backend port
//!
//! Defines the interface for the free-text completion backend used as a
//! fallback recommender and for taste extraction.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during generation
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Empty response")]
    EmptyResponse,

    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Plain natural-language completion: prompt in, text out
///
/// No schema is enforced on the reply; callers must tolerate free-form,
/// non-compliant text.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
