//! Configuration file loading for tastetrip
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TASTETRIP_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./tastetrip.toml` or `./.tastetrip.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/tastetrip/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGenerativeConfig, FileLoggingConfig, FileOutputConfig,
    FileRecommendationConfig, FileReplConfig, FileSourceConfig, FileStorageConfig, SourceKind,
};
pub use loader::ConfigLoader;
