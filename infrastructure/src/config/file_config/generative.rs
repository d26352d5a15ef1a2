//! Generative backend configuration from TOML (`[generative]` section)

use serde::{Deserialize, Serialize};
use tastetrip_domain::{ConfigIssue, ConfigIssueCode};

/// Raw generative backend configuration from TOML
///
/// Any OpenAI-compatible chat completions endpoint works.
///
/// # Example
///
/// ```toml
/// [generative]
/// base_url = "http://localhost:11434"
/// model = "llama3.1"
/// api_key_env = "OPENAI_API_KEY"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerativeConfig {
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the bearer token
    pub api_key_env: String,
    /// Inline key; takes precedence over `api_key_env`
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

impl Default for FileGenerativeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            max_tokens: 512,
            temperature: 0.7,
            timeout_seconds: 60,
        }
    }
}

impl FileGenerativeConfig {
    /// Resolve the API key: inline value first, then the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingValue {
                    field: "generative.model".to_string(),
                },
                "generative.model must not be empty",
            ));
        }
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingValue {
                    field: "generative.base_url".to_string(),
                },
                "generative.base_url must not be empty",
            ));
        }
        if self.max_tokens == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroLimit {
                    field: "generative.max_tokens".to_string(),
                },
                "generative.max_tokens must be greater than zero",
            ));
        }

        issues
    }
}
