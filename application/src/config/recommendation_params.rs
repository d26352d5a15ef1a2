//! Recommendation parameters: aggregation limits.
//!
//! [`RecommendationParams`] groups the static parameters used by
//! [`AggregateRecommendationsUseCase`](crate::use_cases::aggregate_recommendations::AggregateRecommendationsUseCase).
//! These are application-layer concerns, not domain policy; the defaults
//! match the domain constants.

use serde::{Deserialize, Serialize};
use tastetrip_domain::{Category, MAX_ITEMS_PER_CATEGORY, SUFFICIENCY_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationParams {
    /// Items kept per category after normalization.
    pub max_items: usize,
    /// Categories with fewer items than this go to the generative fallback.
    pub sufficiency_threshold: usize,
    /// Items asked of the generative backend per category.
    pub fallback_items: usize,
    /// Categories queried when the caller names none.
    pub default_categories: Vec<Category>,
}

impl Default for RecommendationParams {
    fn default() -> Self {
        Self {
            max_items: MAX_ITEMS_PER_CATEGORY,
            sufficiency_threshold: SUFFICIENCY_THRESHOLD,
            fallback_items: 3,
            default_categories: Category::default_set(),
        }
    }
}

impl RecommendationParams {
    // ==================== Builder Methods ====================

    pub fn with_max_items(mut self, max: usize) -> Self {
        self.max_items = max;
        self
    }

    pub fn with_sufficiency_threshold(mut self, threshold: usize) -> Self {
        self.sufficiency_threshold = threshold;
        self
    }

    pub fn with_fallback_items(mut self, items: usize) -> Self {
        self.fallback_items = items;
        self
    }

    pub fn with_default_categories(mut self, categories: Vec<Category>) -> Self {
        self.default_categories = categories;
        self
    }

    /// True when a category with `item_count` normalized items needs the fallback
    pub fn is_insufficient(&self, item_count: usize) -> bool {
        item_count < self.sufficiency_threshold
    }
}
