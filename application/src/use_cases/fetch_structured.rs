//! Fetch Structured use case
//!
//! Queries the structured recommendation source once per category, all
//! categories concurrently.

use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::recommendation_source::{CategoryItems, StructuredRecommendationSource};
use std::sync::Arc;
use tastetrip_domain::{Category, Stage, Taste};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Use case for the concurrent structured lookup
///
/// Every call owns its own task group; all tasks are awaited before the
/// call returns, so nothing outlives it.
#[derive(Clone)]
pub struct FetchStructuredUseCase {
    source: Arc<dyn StructuredRecommendationSource>,
}

impl FetchStructuredUseCase {
    pub fn new(source: Arc<dyn StructuredRecommendationSource>) -> Self {
        Self { source }
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, taste: &Taste, categories: &[Category]) -> CategoryItems {
        self.execute_with_progress(taste, categories, &NoProgress)
            .await
    }

    /// Fetch raw items for every category.
    ///
    /// The returned map has an entry for each requested category. A failing
    /// query (source error or panicked task) leaves its category empty.
    pub async fn execute_with_progress(
        &self,
        taste: &Taste,
        categories: &[Category],
        progress: &dyn ProgressNotifier,
    ) -> CategoryItems {
        info!(
            "Fetching structured recommendations for '{}' ({} categories)",
            taste,
            categories.len()
        );
        progress.on_stage_start(Stage::Fetch, categories.len());

        let mut results: CategoryItems = categories.iter().map(|c| (*c, Vec::new())).collect();
        let mut join_set = JoinSet::new();

        for category in categories {
            let source = Arc::clone(&self.source);
            let taste = taste.clone();
            let category = *category;

            join_set.spawn(async move {
                let result = source
                    .recommend(&taste)
                    .await
                    .map(|mut items| items.remove(&category).unwrap_or_default());
                (category, result)
            });
        }

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((category, Ok(items))) => {
                    debug!("Category {} returned {} raw items", category, items.len());
                    progress.on_category_complete(Stage::Fetch, category, items.len());
                    results.insert(category, items);
                }
                Ok((category, Err(e))) => {
                    warn!("Structured lookup for {} failed: {}", category, e);
                    progress.on_category_complete(Stage::Fetch, category, 0);
                }
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        progress.on_stage_complete(Stage::Fetch);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::recommendation_source::SourceError;
    use crate::testing::ScriptedSource;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Barrier;

    struct CountingProgress {
        completed: Mutex<Vec<Category>>,
        stages: Mutex<Vec<Stage>>,
    }

    impl ProgressNotifier for CountingProgress {
        fn on_stage_start(&self, stage: Stage, _total_tasks: usize) {
            self.stages.lock().unwrap().push(stage);
        }

        fn on_category_complete(&self, _stage: Stage, category: Category, _item_count: usize) {
            self.completed.lock().unwrap().push(category);
        }

        fn on_stage_complete(&self, _stage: Stage) {}
    }

    fn taste(s: &str) -> Taste {
        Taste::try_new(s).unwrap()
    }

    #[tokio::test]
    async fn test_one_query_per_category() {
        let source = Arc::new(
            ScriptedSource::new()
                .with("jazz", Category::Music, &["Coltrane", "Monk"])
                .with("jazz", Category::Place, &["Blue Note"]),
        );
        let use_case = FetchStructuredUseCase::new(source.clone());

        let results = use_case
            .execute(
                &taste("jazz"),
                &[Category::Music, Category::Place, Category::Food],
            )
            .await;

        assert_eq!(source.calls(), 3);
        assert_eq!(results.len(), 3);
        assert_eq!(results[&Category::Music], vec!["Coltrane", "Monk"]);
        assert_eq!(results[&Category::Place], vec!["Blue Note"]);
        assert!(results[&Category::Food].is_empty());
    }

    #[tokio::test]
    async fn test_source_failure_yields_empty_categories() {
        let source = Arc::new(ScriptedSource::new().failing_for("jazz"));
        let use_case = FetchStructuredUseCase::new(source);

        let results = use_case
            .execute(&taste("jazz"), &[Category::Music, Category::Food])
            .await;

        assert_eq!(results.len(), 2);
        assert!(results.values().all(|items| items.is_empty()));
    }

    #[tokio::test]
    async fn test_reports_progress_for_every_category() {
        let source = Arc::new(ScriptedSource::new().with("tea", Category::Food, &["matcha"]));
        let use_case = FetchStructuredUseCase::new(source);
        let progress = CountingProgress {
            completed: Mutex::new(Vec::new()),
            stages: Mutex::new(Vec::new()),
        };

        use_case
            .execute_with_progress(
                &taste("tea"),
                &[Category::Food, Category::Book],
                &progress,
            )
            .await;

        let mut completed = progress.completed.lock().unwrap().clone();
        completed.sort();
        assert_eq!(completed, vec![Category::Food, Category::Book]);
        assert_eq!(*progress.stages.lock().unwrap(), vec![Stage::Fetch]);
    }

    /// Panics on its first call, answers `["x"]` for every category after
    struct PanicsOnFirstCall {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl StructuredRecommendationSource for PanicsOnFirstCall {
        async fn recommend(&self, _taste: &Taste) -> Result<CategoryItems, SourceError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("source blew up");
            }
            Ok([Category::Music, Category::Food]
                .into_iter()
                .map(|c| (c, vec!["x".to_string()]))
                .collect())
        }
    }

    /// Blocks every call until `parties` calls are in flight at once
    struct GatedSource {
        barrier: Barrier,
    }

    #[async_trait]
    impl StructuredRecommendationSource for GatedSource {
        async fn recommend(&self, _taste: &Taste) -> Result<CategoryItems, SourceError> {
            self.barrier.wait().await;
            Ok(Category::default_set()
                .into_iter()
                .map(|c| (c, vec![c.as_str().to_string()]))
                .collect())
        }
    }

    #[tokio::test]
    async fn test_panicked_task_leaves_only_its_category_empty() {
        let source = Arc::new(PanicsOnFirstCall {
            calls: AtomicUsize::new(0),
        });
        let use_case = FetchStructuredUseCase::new(source);

        let results = use_case
            .execute(&taste("jazz"), &[Category::Music, Category::Food])
            .await;

        assert_eq!(results.len(), 2);
        let empty: Vec<_> = results
            .iter()
            .filter(|(_, items)| items.is_empty())
            .map(|(c, _)| *c)
            .collect();
        assert_eq!(empty.len(), 1);
        let filled = results.values().filter(|items| *items == &vec!["x".to_string()]);
        assert_eq!(filled.count(), 1);
    }

    #[tokio::test]
    async fn test_categories_are_queried_concurrently() {
        let categories = Category::default_set();
        let source = Arc::new(GatedSource {
            barrier: Barrier::new(categories.len()),
        });
        let use_case = FetchStructuredUseCase::new(source);

        // Sequential queries would never get past the barrier
        let results = tokio::time::timeout(
            Duration::from_secs(5),
            use_case.execute(&taste("jazz"), &categories),
        )
        .await
        .expect("categories were not queried concurrently");

        assert_eq!(results.len(), categories.len());
        for category in &categories {
            assert_eq!(results[category], vec![category.as_str().to_string()]);
        }
    }

    #[tokio::test]
    async fn test_no_categories() {
        let source = Arc::new(ScriptedSource::new());
        let use_case = FetchStructuredUseCase::new(source.clone());

        let results = use_case.execute(&taste("jazz"), &[]).await;
        assert!(results.is_empty());
        assert_eq!(source.calls(), 0);
    }
}
