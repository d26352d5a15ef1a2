//! Trip persistence port

use async_trait::async_trait;
use tastetrip_domain::Trip;
use thiserror::Error;

/// Errors from trip storage
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Load/save of the traveler's locked trips
///
/// The whole list is read and written at once; there is no partial update.
#[async_trait]
pub trait TripRepository: Send + Sync {
    async fn load_trips(&self) -> Result<Vec<Trip>, RepositoryError>;

    async fn save_trips(&self, trips: &[Trip]) -> Result<(), RepositoryError>;
}
