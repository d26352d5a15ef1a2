//! Recommendation set entity

use crate::core::category::Category;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Per-category recommendation lists (Entity)
///
/// Entries keep the order in which categories were inserted, which is the
/// order the caller requested them in. Item lists keep discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationSet {
    entries: Vec<(Category, Vec<String>)>,
}

impl RecommendationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the items for a category
    pub fn insert(&mut self, category: Category, items: Vec<String>) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, existing)) => *existing = items,
            None => self.entries.push((category, items)),
        }
    }

    /// Items for a category, if the category is present
    pub fn get(&self, category: Category) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, items)| items.as_slice())
    }

    /// Items for a category, or an empty slice
    pub fn items(&self, category: Category) -> &[String] {
        self.get(category).unwrap_or(&[])
    }

    pub fn contains(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Categories in insertion order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|(c, _)| *c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.entries.iter().map(|(c, items)| (*c, items.as_slice()))
    }

    /// Number of categories (not items)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no category is present at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every present category has zero items
    pub fn has_no_items(&self) -> bool {
        self.entries.iter().all(|(_, items)| items.is_empty())
    }

    pub fn total_items(&self) -> usize {
        self.entries.iter().map(|(_, items)| items.len()).sum()
    }
}

impl Serialize for RecommendationSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, items) in &self.entries {
            map.serialize_entry(category.as_str(), items)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_insert_preserves_order_and_replaces() {
        let mut set = RecommendationSet::new();
        set.insert(Category::Food, items(&["sushi"]));
        set.insert(Category::Music, items(&["jazz"]));
        set.insert(Category::Food, items(&["ramen", "pho"]));

        let order: Vec<_> = set.categories().collect();
        assert_eq!(order, vec![Category::Food, Category::Music]);
        assert_eq!(set.items(Category::Food), &["ramen", "pho"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.total_items(), 3);
    }

    #[test]
    fn test_missing_category() {
        let set = RecommendationSet::new();
        assert!(set.get(Category::Book).is_none());
        assert!(set.items(Category::Book).is_empty());
        assert!(set.is_empty());
        assert!(set.has_no_items());
    }

    #[test]
    fn test_present_but_empty() {
        let mut set = RecommendationSet::new();
        set.insert(Category::Game, Vec::new());
        assert!(!set.is_empty());
        assert!(set.has_no_items());
        assert!(set.contains(Category::Game));
    }

    #[test]
    fn test_serialize_as_map() {
        let mut set = RecommendationSet::new();
        set.insert(Category::Music, items(&["jazz", "rock"]));
        set.insert(Category::Tv, Vec::new());
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"music":["jazz","rock"],"tv":[]}"#);
    }
}
