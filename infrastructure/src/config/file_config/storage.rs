//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// JSON file holding locked trips
    pub trips_file: Option<String>,
}

impl FileStorageConfig {
    /// Configured trips file, or `$XDG_DATA_HOME/tastetrip/trips.json`
    pub fn resolve_trips_file(&self) -> PathBuf {
        match &self.trips_file {
            Some(path) => PathBuf::from(path),
            None => dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("tastetrip")
                .join("trips.json"),
        }
    }
}
