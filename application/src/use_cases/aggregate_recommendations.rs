//! Aggregate Recommendations use case
//!
//! Orchestrates the full recommendation flow:
//!
//! 1. Structured lookup for every requested category, concurrently
//! 2. Normalization and capping per category
//! 3. Gap detection: categories below the sufficiency threshold
//! 4. One batched generative fallback for the gaps
//! 5. Merge of fallback items into the insufficient categories only

use crate::config::RecommendationParams;
use crate::ports::generative_backend::GenerativeBackend;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::recommendation_source::StructuredRecommendationSource;
use crate::use_cases::fetch_structured::FetchStructuredUseCase;
use crate::use_cases::generate_fallback::GenerateFallbackUseCase;
use std::sync::Arc;
use tastetrip_domain::{Category, RecommendationSet, Taste, TasteDomainPair, normalize_capped};
use tracing::{debug, info};

/// Input for the AggregateRecommendations use case
#[derive(Debug, Clone)]
pub struct AggregateRecommendationsInput {
    /// Raw taste text; blank text yields an empty result
    pub taste: String,
    /// Categories to fill; `None` uses the configured defaults
    pub categories: Option<Vec<Category>>,
}

impl AggregateRecommendationsInput {
    pub fn new(taste: impl Into<String>) -> Self {
        Self {
            taste: taste.into(),
            categories: None,
        }
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = Some(categories);
        self
    }
}

/// Use case for building a [`RecommendationSet`] for one taste
///
/// Never fails: backend problems only make the result sparser. Given stable
/// backend responses, repeated calls return identical sets.
#[derive(Clone)]
pub struct AggregateRecommendationsUseCase {
    fetcher: FetchStructuredUseCase,
    fallback: GenerateFallbackUseCase,
    params: RecommendationParams,
}

impl AggregateRecommendationsUseCase {
    pub fn new(
        source: Arc<dyn StructuredRecommendationSource>,
        backend: Arc<dyn GenerativeBackend>,
    ) -> Self {
        let params = RecommendationParams::default();
        Self {
            fetcher: FetchStructuredUseCase::new(source),
            fallback: GenerateFallbackUseCase::new(backend)
                .with_items_per_category(params.fallback_items),
            params,
        }
    }

    pub fn with_params(mut self, params: RecommendationParams) -> Self {
        self.fallback = self
            .fallback
            .with_items_per_category(params.fallback_items);
        self.params = params;
        self
    }

    pub fn params(&self) -> &RecommendationParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: AggregateRecommendationsInput) -> RecommendationSet {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: AggregateRecommendationsInput,
        progress: &dyn ProgressNotifier,
    ) -> RecommendationSet {
        let Some(taste) = Taste::try_new(&input.taste) else {
            debug!("Blank taste, skipping aggregation");
            return RecommendationSet::new();
        };

        let categories = input
            .categories
            .unwrap_or_else(|| self.params.default_categories.clone());

        self.recommend(&taste, &categories, progress).await
    }

    /// Aggregate for an already validated taste
    pub async fn recommend(
        &self,
        taste: &Taste,
        categories: &[Category],
        progress: &dyn ProgressNotifier,
    ) -> RecommendationSet {
        let categories = dedup_categories(categories);
        info!(
            "Aggregating recommendations for '{}' over {} categories",
            taste,
            categories.len()
        );

        // Stage 1: structured lookup
        let mut fetched = self
            .fetcher
            .execute_with_progress(taste, &categories, progress)
            .await;

        // Stage 2: normalize, cap and detect gaps
        let mut final_set = RecommendationSet::new();
        let mut missing = Vec::new();

        for category in &categories {
            let raw = fetched.remove(category).unwrap_or_default();
            let cleaned = normalize_capped(&raw, self.params.max_items);
            if self.params.is_insufficient(cleaned.len()) {
                missing.push(*category);
            }
            final_set.insert(*category, cleaned);
        }

        if missing.is_empty() {
            debug!("All categories sufficient, no fallback needed");
            return final_set;
        }

        // Stage 3: batched fallback for the gaps
        debug!(
            "Insufficient categories: {}",
            missing
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        let pairs: Vec<TasteDomainPair> = missing
            .iter()
            .map(|c| TasteDomainPair::new(taste.clone(), *c))
            .collect();
        let generated = self.fallback.execute_with_progress(&pairs, progress).await;

        // Stage 4: merge into insufficient categories only
        for pair in pairs {
            let Some(extra) = generated.get(&pair) else {
                continue;
            };
            let existing = final_set.items(pair.category);
            let merged = normalize_capped(existing.iter().chain(extra), self.params.max_items);
            final_set.insert(pair.category, merged);
        }

        final_set
    }
}

fn dedup_categories(categories: &[Category]) -> Vec<Category> {
    let mut unique = Vec::with_capacity(categories.len());
    for category in categories {
        if !unique.contains(category) {
            unique.push(*category);
        }
    }
    unique
}
