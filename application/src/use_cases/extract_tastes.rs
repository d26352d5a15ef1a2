//! Extract Tastes use case
//!
//! Pulls taste keywords out of a free-form chat message with the help of
//! the generative backend.

use crate::ports::generative_backend::GenerativeBackend;
use std::sync::Arc;
use tastetrip_domain::{RecommendationPrompt, Taste, parse_taste_list};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct ExtractTastesUseCase {
    backend: Arc<dyn GenerativeBackend>,
}

impl ExtractTastesUseCase {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    /// Returns at most five tastes; an empty list when the message is blank
    /// or the backend is unavailable.
    pub async fn execute(&self, message: &str) -> Vec<Taste> {
        if message.trim().is_empty() {
            return Vec::new();
        }

        let prompt = RecommendationPrompt::taste_extraction(message);
        let reply = match self.backend.generate(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Taste extraction failed: {}", e);
                return Vec::new();
            }
        };

        let tastes: Vec<Taste> = parse_taste_list(&reply)
            .into_iter()
            .filter_map(Taste::try_new)
            .collect();
        debug!("Extracted {} taste(s) from message", tastes.len());
        tastes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedBackend;

    #[tokio::test]
    async fn test_extracts_comma_list() {
        let backend = Arc::new(ScriptedBackend::new().reply("ramen, city pop, Ramen"));
        let use_case = ExtractTastesUseCase::new(backend.clone());

        let tastes = use_case
            .execute("Craving ramen while listening to city pop")
            .await;

        let names: Vec<_> = tastes.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, vec!["ramen", "city pop"]);
        assert!(backend.prompts()[0].contains("Craving ramen"));
    }

    #[tokio::test]
    async fn test_blank_message_skips_backend() {
        let backend = Arc::new(ScriptedBackend::new());
        let use_case = ExtractTastesUseCase::new(backend.clone());
        assert!(use_case.execute("  ").await.is_empty());
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_backend_failure_yields_nothing() {
        let backend = Arc::new(ScriptedBackend::new().fail());
        let use_case = ExtractTastesUseCase::new(backend);
        assert!(use_case.execute("I like jazz").await.is_empty());
    }

    #[tokio::test]
    async fn test_none_reply() {
        let backend = Arc::new(ScriptedBackend::new().reply("NONE"));
        let use_case = ExtractTastesUseCase::new(backend);
        assert!(use_case.execute("hello there").await.is_empty());
    }
}
