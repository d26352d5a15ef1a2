//! HTTP taste-graph source
//!
//! `GET {base_url}/recommendations?taste=<taste>` returning a JSON object
//! that maps category names to item lists.

use super::collect_category_items;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tastetrip_application::{CategoryItems, SourceError, StructuredRecommendationSource};
use tastetrip_domain::Taste;
use tracing::debug;

pub struct HttpRecommendationSource {
    client: reqwest::Client,
    base_url: Option<String>,
    api_key: Option<String>,
    api_key_header: String,
}

impl HttpRecommendationSource {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty()),
            api_key: None,
            api_key_header: "X-Api-Key".to_string(),
        })
    }

    /// Send `key` in `header` with every request
    pub fn with_api_key(mut self, header: impl Into<String>, key: Option<String>) -> Self {
        self.api_key_header = header.into();
        self.api_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    fn endpoint(&self) -> Result<String, SourceError> {
        self.base_url
            .as_ref()
            .map(|base| format!("{}/recommendations", base))
            .ok_or_else(|| SourceError::NotConfigured("source.base_url is not set".to_string()))
    }
}

/// Decode a response body into per-category items
fn parse_body(body: &str) -> Result<CategoryItems, SourceError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| SourceError::InvalidResponse(format!("not JSON: {}", e)))?;
    match value {
        Value::Object(map) => Ok(collect_category_items(&map)),
        other => Err(SourceError::InvalidResponse(format!(
            "expected a JSON object, got {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl StructuredRecommendationSource for HttpRecommendationSource {
    async fn recommend(&self, taste: &Taste) -> Result<CategoryItems, SourceError> {
        let url = self.endpoint()?;
        debug!("GET {} taste='{}'", url, taste);

        let mut request = self.client.get(&url).query(&[("taste", taste.as_str())]);
        if let Some(key) = &self.api_key {
            request = request.header(self.api_key_header.as_str(), key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SourceError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::RequestFailed(format!("HTTP {}: {}", status, body)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))?;
        parse_body(&body)
    }
}
