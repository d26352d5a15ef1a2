//! Generate Fallback use case
//!
//! Tops up under-served categories with items from the generative backend,
//! one batched prompt per taste.

use crate::ports::generative_backend::GenerativeBackend;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use std::collections::HashMap;
use std::sync::Arc;
use tastetrip_domain::{
    Category, RecommendationPrompt, Stage, TasteDomainPair, group_by_taste, parse_fallback_reply,
};
use tracing::{debug, info, warn};

/// Fallback items keyed by the (taste, category) pair that asked for them
pub type FallbackResults = HashMap<TasteDomainPair, Vec<String>>;

/// Use case for the batched generative fallback
///
/// Backend calls are sequential: batching all categories of a taste into a
/// single prompt is what keeps the number of calls down.
#[derive(Clone)]
pub struct GenerateFallbackUseCase {
    backend: Arc<dyn GenerativeBackend>,
    items_per_category: usize,
}

impl GenerateFallbackUseCase {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            backend,
            items_per_category: 3,
        }
    }

    /// Set how many items the prompt asks for per category
    pub fn with_items_per_category(mut self, items: usize) -> Self {
        self.items_per_category = items;
        self
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, pairs: &[TasteDomainPair]) -> FallbackResults {
        self.execute_with_progress(pairs, &NoProgress).await
    }

    /// Ask the backend for every pair, one call per distinct taste.
    ///
    /// A failed call or an unparseable reply contributes no entries for its
    /// taste; nothing is propagated to the caller.
    pub async fn execute_with_progress(
        &self,
        pairs: &[TasteDomainPair],
        progress: &dyn ProgressNotifier,
    ) -> FallbackResults {
        let mut results = FallbackResults::new();
        if pairs.is_empty() {
            return results;
        }

        let groups = group_by_taste(pairs);
        info!(
            "Generative fallback for {} pair(s) across {} taste(s)",
            pairs.len(),
            groups.len()
        );
        progress.on_stage_start(Stage::Fallback, pairs.len());

        for (taste, categories) in groups {
            let prompt = RecommendationPrompt::fallback(&taste, &categories, self.items_per_category);
            debug!("Fallback prompt for '{}':\n{}", taste, prompt);

            let parsed: HashMap<Category, Vec<String>> = match self.backend.generate(&prompt).await {
                Ok(reply) => parse_fallback_reply(&reply, &categories),
                Err(e) => {
                    warn!("Generative fallback for '{}' failed: {}", taste, e);
                    HashMap::new()
                }
            };

            if parsed.is_empty() {
                debug!("No usable fallback lines for '{}'", taste);
            }

            for category in &categories {
                let count = parsed.get(category).map_or(0, Vec::len);
                progress.on_category_complete(Stage::Fallback, *category, count);
            }

            for (category, items) in parsed {
                results.insert(TasteDomainPair::new(taste.clone(), category), items);
            }
        }

        progress.on_stage_complete(Stage::Fallback);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedBackend;
    use tastetrip_domain::Taste;

    fn pair(taste: &str, category: Category) -> TasteDomainPair {
        TasteDomainPair::new(Taste::try_new(taste).unwrap(), category)
    }

    #[tokio::test]
    async fn test_parses_batched_reply() {
        let backend = Arc::new(ScriptedBackend::new().reply("music: jazz, rock, pop\nfood: sushi"));
        let use_case = GenerateFallbackUseCase::new(backend.clone());

        let results = use_case
            .execute(&[pair("taste", Category::Music), pair("taste", Category::Food)])
            .await;

        assert_eq!(backend.calls(), 1);
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[&pair("taste", Category::Music)],
            vec!["jazz", "rock", "pop"]
        );
        assert_eq!(results[&pair("taste", Category::Food)], vec!["sushi"]);
    }

    #[tokio::test]
    async fn test_one_call_per_taste() {
        let backend = Arc::new(
            ScriptedBackend::new()
                .reply("music: a, b")
                .reply("food: c"),
        );
        let use_case = GenerateFallbackUseCase::new(backend.clone());

        let results = use_case
            .execute(&[
                pair("jazz", Category::Music),
                pair("ramen", Category::Food),
                pair("jazz", Category::Place),
            ])
            .await;

        assert_eq!(backend.calls(), 2);
        let prompts = backend.prompts();
        assert!(prompts[0].contains("A person likes 'jazz'"));
        assert!(prompts[0].contains("music, place"));
        assert!(prompts[1].contains("A person likes 'ramen'"));
        assert_eq!(results[&pair("jazz", Category::Music)], vec!["a", "b"]);
        assert_eq!(results[&pair("ramen", Category::Food)], vec!["c"]);
        assert!(!results.contains_key(&pair("jazz", Category::Place)));
    }

    #[tokio::test]
    async fn test_unrequested_lines_discarded() {
        let backend = Arc::new(ScriptedBackend::new().reply("unknownfield: a, b\nfood: pho"));
        let use_case = GenerateFallbackUseCase::new(backend);

        let results = use_case.execute(&[pair("soup", Category::Music)]).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_backend_failure_skips_only_that_taste() {
        let backend = Arc::new(ScriptedBackend::new().fail().reply("book: Dune"));
        let use_case = GenerateFallbackUseCase::new(backend.clone());

        let results = use_case
            .execute(&[pair("jazz", Category::Music), pair("scifi", Category::Book)])
            .await;

        assert_eq!(backend.calls(), 2);
        assert_eq!(results.len(), 1);
        assert_eq!(results[&pair("scifi", Category::Book)], vec!["Dune"]);
    }

    #[tokio::test]
    async fn test_no_pairs_no_calls() {
        let backend = Arc::new(ScriptedBackend::new());
        let use_case = GenerateFallbackUseCase::new(backend.clone());
        assert!(use_case.execute(&[]).await.is_empty());
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_items_per_category_in_prompt() {
        let backend = Arc::new(ScriptedBackend::new().reply(""));
        let use_case = GenerateFallbackUseCase::new(backend.clone()).with_items_per_category(2);
        use_case.execute(&[pair("anime", Category::Tv)]).await;
        assert!(backend.prompts()[0].contains("tv: item1, item2\n"));
    }
}
