//! Structured source configuration from TOML (`[source]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tastetrip_domain::{ConfigIssue, ConfigIssueCode};

/// Which structured recommendation source to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceKind {
    /// Remote HTTP taste-graph service
    #[default]
    Http,
    /// Local TOML catalog file
    Catalog,
}

impl SourceKind {
    pub const VALID: [&'static str; 2] = ["http", "catalog"];
}

/// Raw source configuration from TOML
///
/// # Example
///
/// ```toml
/// [source]
/// kind = "http"
/// base_url = "https://tastes.example.com"
/// api_key_env = "TASTETRIP_SOURCE_KEY"
/// cache = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourceConfig {
    /// "http" or "catalog"
    pub kind: String,
    /// Base URL of the HTTP taste-graph service
    pub base_url: Option<String>,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Header name the API key is sent in
    pub api_key_header: String,
    /// Catalog file used when `kind = "catalog"`
    pub catalog_path: Option<PathBuf>,
    /// Memoize successful lookups per taste for the process lifetime
    pub cache: bool,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileSourceConfig {
    fn default() -> Self {
        Self {
            kind: "http".to_string(),
            base_url: None,
            api_key_env: "TASTETRIP_SOURCE_KEY".to_string(),
            api_key_header: "X-Api-Key".to_string(),
            catalog_path: None,
            cache: true,
            timeout_seconds: 15,
        }
    }
}

impl FileSourceConfig {
    /// Parse `kind`, falling back to HTTP with a warning.
    pub fn parse_kind(&self) -> (SourceKind, Vec<ConfigIssue>) {
        match self.kind.trim().to_lowercase().as_str() {
            "http" => (SourceKind::Http, vec![]),
            "catalog" => (SourceKind::Catalog, vec![]),
            other => (
                SourceKind::Http,
                vec![ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "source.kind".to_string(),
                        value: other.to_string(),
                        valid_values: SourceKind::VALID.iter().map(|s| s.to_string()).collect(),
                    },
                    format!("source.kind: unknown value '{}', falling back to 'http'", other),
                )],
            ),
        }
    }

    /// Check that the selected kind has what it needs.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let (kind, mut issues) = self.parse_kind();

        match kind {
            SourceKind::Http if self.base_url.as_deref().is_none_or(|u| u.trim().is_empty()) => {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::MissingValue {
                        field: "source.base_url".to_string(),
                    },
                    "source.base_url is not set; structured lookups will return nothing",
                ));
            }
            SourceKind::Catalog if self.catalog_path.is_none() => {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::MissingValue {
                        field: "source.catalog_path".to_string(),
                    },
                    "source.kind is 'catalog' but source.catalog_path is not set",
                ));
            }
            _ => {}
        }

        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroLimit {
                    field: "source.timeout_seconds".to_string(),
                },
                "source.timeout_seconds must be greater than zero",
            ));
        }

        issues
    }
}
