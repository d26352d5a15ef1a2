//! Local TOML catalog source
//!
//! ```toml
//! [tastes."jazz"]
//! music = ["Kind of Blue", "A Love Supreme"]
//! place = ["Blue Note"]
//! ```
//!
//! Taste lookup is case-insensitive; unknown tastes yield no items.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tastetrip_application::{CategoryItems, SourceError, StructuredRecommendationSource};
use tastetrip_domain::{Category, Taste};
use tracing::{debug, info};

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tastes: HashMap<String, HashMap<String, Vec<String>>>,
}

#[derive(Debug, Default)]
pub struct CatalogRecommendationSource {
    entries: HashMap<String, CategoryItems>,
}

impl CatalogRecommendationSource {
    /// Read and parse a catalog file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SourceError::NotConfigured(format!("cannot read catalog {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_toml_str(&content)?;
        info!(
            "Loaded catalog {} with {} taste(s)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, SourceError> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| SourceError::InvalidResponse(format!("invalid catalog: {}", e)))?;

        let mut entries: HashMap<String, CategoryItems> = HashMap::new();
        for (taste, categories) in file.tastes {
            let entry = entries.entry(taste.trim().to_lowercase()).or_default();
            for (name, items) in categories {
                match name.parse::<Category>() {
                    Ok(category) => entry.entry(category).or_default().extend(items),
                    Err(_) => debug!("Catalog: ignoring unknown category '{}'", name),
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl StructuredRecommendationSource for CatalogRecommendationSource {
    async fn recommend(&self, taste: &Taste) -> Result<CategoryItems, SourceError> {
        Ok(self.entries.get(&taste.key()).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
[tastes."Jazz"]
music = ["Kind of Blue", "A Love Supreme"]
place = ["Blue Note"]
weather = ["rainy"]

[tastes.ramen]
food = ["tonkotsu"]
"#;

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let catalog = CatalogRecommendationSource::from_toml_str(CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);

        let items = catalog
            .recommend(&Taste::try_new("JAZZ").unwrap())
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[&Category::Music], vec!["Kind of Blue", "A Love Supreme"]);
        assert_eq!(items[&Category::Place], vec!["Blue Note"]);
    }

    #[tokio::test]
    async fn test_unknown_taste_is_empty() {
        let catalog = CatalogRecommendationSource::from_toml_str(CATALOG).unwrap();
        let items = catalog
            .recommend(&Taste::try_new("opera").unwrap())
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(CatalogRecommendationSource::from_toml_str("[tastes").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, CATALOG).unwrap();

        let catalog = CatalogRecommendationSource::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);

        let missing = CatalogRecommendationSource::load(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(SourceError::NotConfigured(_))));
    }
}
