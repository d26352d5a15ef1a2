//! Memoizing source decorator
//!
//! The aggregator queries the source once per category with the same taste;
//! this decorator collapses those into a single upstream call. Only
//! successful lookups are remembered.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tastetrip_application::{CategoryItems, SourceError, StructuredRecommendationSource};
use tastetrip_domain::Taste;
use tokio::sync::OnceCell;
use tracing::trace;

pub struct CachedRecommendationSource {
    inner: Arc<dyn StructuredRecommendationSource>,
    cells: Mutex<HashMap<String, Arc<OnceCell<CategoryItems>>>>,
}

impl CachedRecommendationSource {
    pub fn new(inner: Arc<dyn StructuredRecommendationSource>) -> Self {
        Self {
            inner,
            cells: Mutex::new(HashMap::new()),
        }
    }

    fn cell_for(&self, key: String) -> Arc<OnceCell<CategoryItems>> {
        let mut cells = match self.cells.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(cells.entry(key).or_default())
    }
}

#[async_trait]
impl StructuredRecommendationSource for CachedRecommendationSource {
    async fn recommend(&self, taste: &Taste) -> Result<CategoryItems, SourceError> {
        let cell = self.cell_for(taste.key());
        if let Some(items) = cell.get() {
            trace!("Cache hit for '{}'", taste);
            return Ok(items.clone());
        }

        let items = cell
            .get_or_try_init(|| self.inner.recommend(taste))
            .await?;
        Ok(items.clone())
    }
}
