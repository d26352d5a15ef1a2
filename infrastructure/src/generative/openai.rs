//! OpenAI-compatible chat completions backend
//!
//! Works with any server exposing `POST {base_url}/v1/chat/completions`
//! (OpenAI, Ollama, vLLM, llama.cpp server, ...).

use crate::config::FileGenerativeConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tastetrip_application::{GenerationError, GenerativeBackend};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct OpenAiCompatibleBackend {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiCompatibleBackend {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
            max_tokens: 512,
            temperature: 0.7,
        })
    }

    /// Build from the `[generative]` config section, resolving the API key
    pub fn from_config(config: &FileGenerativeConfig) -> Result<Self, GenerationError> {
        let mut backend = Self::new(
            &config.base_url,
            &config.model,
            Duration::from_secs(config.timeout_seconds.max(1)),
        )?;
        backend.api_key = config.resolve_api_key();
        backend.api_key_env = config.api_key_env.clone();
        backend.max_tokens = config.max_tokens;
        backend.temperature = config.temperature;
        Ok(backend)
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

/// Pull the first choice's text out of a response body
fn extract_content(body: &str) -> Result<String, GenerationError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| GenerationError::Other(format!("Failed to parse response: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(GenerationError::EmptyResponse)
}

#[async_trait]
impl GenerativeBackend for OpenAiCompatibleBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::MissingApiKey(self.api_key_env.clone()))?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        debug!("POST {} model={}", self.endpoint(), self.model);
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::ConnectionError(e.to_string()))?;
        if !status.is_success() {
            return Err(GenerationError::RequestFailed(format!(
                "API error {}: {}",
                status, body
            )));
        }

        extract_content(&body)
    }
}
