//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generative;
mod logging;
mod output;
mod recommendation;
mod repl;
mod source;
mod storage;

pub use generative::FileGenerativeConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use recommendation::FileRecommendationConfig;
pub use repl::FileReplConfig;
pub use source::{FileSourceConfig, SourceKind};
pub use storage::FileStorageConfig;

use serde::{Deserialize, Serialize};
use tastetrip_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Aggregation limits and default categories
    pub recommendation: FileRecommendationConfig,
    /// Structured recommendation source
    pub source: FileSourceConfig,
    /// Generative fallback backend
    pub generative: FileGenerativeConfig,
    /// Trip persistence
    pub storage: FileStorageConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Diagnostic log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.recommendation.to_params().1);
        issues.extend(self.source.validate());
        issues.extend(self.generative.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tastetrip_domain::{Category, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[recommendation]
max_items = 4
default_categories = ["music", "food"]

[source]
kind = "catalog"
catalog_path = "catalog.toml"
cache = false

[generative]
model = "llama3.1"
base_url = "http://localhost:11434"

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/tastetrip/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (params, issues) = config.recommendation.to_params();
        assert!(issues.is_empty());
        assert_eq!(params.max_items, 4);
        assert_eq!(params.default_categories, vec![Category::Music, Category::Food]);
        assert_eq!(config.source.parse_kind().0, SourceKind::Catalog);
        assert!(!config.source.cache);
        assert_eq!(config.generative.model, "llama3.1");
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[generative]
model = "gpt-4o"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generative.model, "gpt-4o");
        // Defaults should apply
        assert_eq!(config.recommendation.max_items, 5);
        assert!(config.source.cache);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let toml_str = r#"
[recommendation]
max_items = 0
default_categories = ["weather"]

[source]
kind = "catalog"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 2);
        assert_eq!(issues.iter().filter(|i| !i.is_error()).count(), 1);
    }
}
