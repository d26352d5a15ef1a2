//! Structured recommendation sources
//!
//! Adapters implementing
//! [`StructuredRecommendationSource`](tastetrip_application::StructuredRecommendationSource).

mod cached;
mod catalog;
mod http;

pub use cached::CachedRecommendationSource;
pub use catalog::CatalogRecommendationSource;
pub use http::HttpRecommendationSource;

use serde_json::Value;
use tastetrip_application::CategoryItems;
use tastetrip_domain::Category;
use tracing::debug;

/// Collect `category -> [items]` entries from a JSON object.
///
/// Unknown category keys and non-string items are skipped.
fn collect_category_items(body: &serde_json::Map<String, Value>) -> CategoryItems {
    let mut items = CategoryItems::new();
    for (key, value) in body {
        let Ok(category) = key.parse::<Category>() else {
            debug!("Ignoring unknown category key '{}'", key);
            continue;
        };
        let Some(values) = value.as_array() else {
            continue;
        };
        let strings: Vec<String> = values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        items.entry(category).or_default().extend(strings);
    }
    items
}
