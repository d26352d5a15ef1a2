//! Recommendation configuration from TOML (`[recommendation]` section)

use serde::{Deserialize, Serialize};
use tastetrip_application::RecommendationParams;
use tastetrip_domain::{Category, ConfigIssue, ConfigIssueCode};

/// Raw recommendation configuration from TOML
///
/// # Example
///
/// ```toml
/// [recommendation]
/// max_items = 5
/// sufficiency_threshold = 2
/// fallback_items = 3
/// default_categories = ["music", "food", "place"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRecommendationConfig {
    pub max_items: usize,
    pub sufficiency_threshold: usize,
    pub fallback_items: usize,
    pub default_categories: Vec<String>,
}

impl Default for FileRecommendationConfig {
    fn default() -> Self {
        let params = RecommendationParams::default();
        Self {
            max_items: params.max_items,
            sufficiency_threshold: params.sufficiency_threshold,
            fallback_items: params.fallback_items,
            default_categories: params
                .default_categories
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        }
    }
}

impl FileRecommendationConfig {
    /// Parse the default categories, skipping (and reporting) unknown names.
    ///
    /// Falls back to the built-in defaults when nothing valid remains.
    pub fn parse_default_categories(&self) -> (Vec<Category>, Vec<ConfigIssue>) {
        let mut categories = Vec::new();
        let mut issues = Vec::new();

        for name in &self.default_categories {
            match name.parse::<Category>() {
                Ok(category) => {
                    if !categories.contains(&category) {
                        categories.push(category);
                    }
                }
                Err(_) => issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownCategory {
                        field: "recommendation.default_categories".to_string(),
                        value: name.clone(),
                    },
                    format!(
                        "recommendation.default_categories: unknown category '{}', ignoring",
                        name
                    ),
                )),
            }
        }

        if categories.is_empty() {
            categories = Category::default_set();
        }

        (categories, issues)
    }

    /// Convert to application parameters, reporting invalid limits.
    pub fn to_params(&self) -> (RecommendationParams, Vec<ConfigIssue>) {
        let (categories, mut issues) = self.parse_default_categories();
        let defaults = RecommendationParams::default();

        let mut limit = |field: &str, value: usize, default: usize| {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ZeroLimit {
                        field: format!("recommendation.{}", field),
                    },
                    format!("recommendation.{} must be greater than zero", field),
                ));
                default
            } else {
                value
            }
        };

        let max_items = limit("max_items", self.max_items, defaults.max_items);
        let fallback_items = limit("fallback_items", self.fallback_items, defaults.fallback_items);

        let params = RecommendationParams::default()
            .with_max_items(max_items)
            .with_sufficiency_threshold(self.sufficiency_threshold)
            .with_fallback_items(fallback_items)
            .with_default_categories(categories);

        (params, issues)
    }
}
