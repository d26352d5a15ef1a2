//! Structured recommendation source port
//!
//! Defines the interface for the fast, pre-curated recommendation backend.

use async_trait::async_trait;
use std::collections::HashMap;
use tastetrip_domain::{Category, Taste};
use thiserror::Error;

/// Raw items per category, as returned by a structured source
pub type CategoryItems = HashMap<Category, Vec<String>>;

/// Errors that can occur while querying a structured source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Source not configured: {0}")]
    NotConfigured(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Keyed recommendation backend
///
/// Returns pre-curated items for a taste, keyed by category. Categories the
/// source knows nothing about are simply absent from the map.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait StructuredRecommendationSource: Send + Sync {
    async fn recommend(&self, taste: &Taste) -> Result<CategoryItems, SourceError>;
}
