//! JSON file trip repository
//!
//! All locked trips live in one pretty-printed JSON array. A missing or
//! empty file reads as no trips.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tastetrip_application::{RepositoryError, TripRepository};
use tastetrip_domain::Trip;
use tracing::debug;

pub struct JsonTripRepository {
    path: PathBuf,
}

impl JsonTripRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TripRepository for JsonTripRepository {
    async fn load_trips(&self) -> Result<Vec<Trip>, RepositoryError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No trips file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn save_trips(&self, trips: &[Trip]) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(trips)?;
        tokio::fs::write(&self.path, json).await?;
        debug!("Saved {} trip(s) to {}", trips.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn trip(destination: &str, days: u32) -> Trip {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        Trip::locked_at(destination, days, Some("1500 EUR".to_string()), at).unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonTripRepository::new(dir.path().join("trips.json"));
        assert!(repo.load_trips().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonTripRepository::new(dir.path().join("nested").join("trips.json"));

        let trips = vec![trip("Tokyo", 5), trip("Lisbon", 3)];
        repo.save_trips(&trips).await.unwrap();

        assert_eq!(repo.load_trips().await.unwrap(), trips);
    }

    #[tokio::test]
    async fn test_file_is_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trips.json");
        let repo = JsonTripRepository::new(&path);
        repo.save_trips(&[trip("Tokyo", 5)]).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n"));
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value[0]["destination"], "Tokyo");
        assert_eq!(value[0]["days"], 5);
        assert_eq!(value[0]["budget"], "1500 EUR");
    }

    #[tokio::test]
    async fn test_corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trips.json");
        std::fs::write(&path, "{not json").unwrap();

        let repo = JsonTripRepository::new(&path);
        assert!(matches!(
            repo.load_trips().await,
            Err(RepositoryError::Serialization(_))
        ));
    }
}
