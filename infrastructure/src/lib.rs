//! Infrastructure layer for tastetrip
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod generative;
pub mod logging;
pub mod source;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGenerativeConfig, FileLoggingConfig, FileOutputConfig,
    FileRecommendationConfig, FileReplConfig, FileSourceConfig, FileStorageConfig, SourceKind,
};
pub use generative::OpenAiCompatibleBackend;
pub use logging::JsonlTranscriptLogger;
pub use source::{
    CachedRecommendationSource, CatalogRecommendationSource, HttpRecommendationSource,
};
pub use storage::JsonTripRepository;
