//! Taste/category pairs used to batch fallback requests

use crate::core::category::Category;
use crate::core::taste::Taste;

/// A (taste, category) request for the generative fallback
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TasteDomainPair {
    pub taste: Taste,
    pub category: Category,
}

impl TasteDomainPair {
    pub fn new(taste: Taste, category: Category) -> Self {
        Self { taste, category }
    }
}

/// Group pairs by taste so each taste needs a single backend call.
///
/// Tastes appear in first-seen order; categories within a taste keep their
/// order and are listed once.
pub fn group_by_taste(pairs: &[TasteDomainPair]) -> Vec<(Taste, Vec<Category>)> {
    let mut groups: Vec<(Taste, Vec<Category>)> = Vec::new();

    for pair in pairs {
        match groups.iter_mut().find(|(taste, _)| *taste == pair.taste) {
            Some((_, categories)) => {
                if !categories.contains(&pair.category) {
                    categories.push(pair.category);
                }
            }
            None => groups.push((pair.taste.clone(), vec![pair.category])),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taste(s: &str) -> Taste {
        Taste::try_new(s).unwrap()
    }

    #[test]
    fn test_groups_share_taste() {
        let pairs = vec![
            TasteDomainPair::new(taste("jazz"), Category::Music),
            TasteDomainPair::new(taste("ramen"), Category::Food),
            TasteDomainPair::new(taste("jazz"), Category::Place),
        ];

        let groups = group_by_taste(&pairs);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, taste("jazz"));
        assert_eq!(groups[0].1, vec![Category::Music, Category::Place]);
        assert_eq!(groups[1].0, taste("ramen"));
        assert_eq!(groups[1].1, vec![Category::Food]);
    }

    #[test]
    fn test_duplicate_pairs_listed_once() {
        let pairs = vec![
            TasteDomainPair::new(taste("jazz"), Category::Music),
            TasteDomainPair::new(taste("jazz"), Category::Music),
        ];
        let groups = group_by_taste(&pairs);
        assert_eq!(groups, vec![(taste("jazz"), vec![Category::Music])]);
    }

    #[test]
    fn test_empty() {
        assert!(group_by_taste(&[]).is_empty());
    }
}
