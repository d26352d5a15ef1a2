//! Item normalization for recommendation lists.

use std::collections::HashSet;

/// Maximum number of items kept per category
pub const MAX_ITEMS_PER_CATEGORY: usize = 5;

/// Minimum item count below which a category is sent to the fallback
pub const SUFFICIENCY_THRESHOLD: usize = 2;

/// Trim, drop blanks and deduplicate case-insensitively.
///
/// First-seen order is preserved and the first spelling wins, so
/// `["Sushi", "sushi", "Ramen"]` becomes `["Sushi", "Ramen"]`.
pub fn normalize_items<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut cleaned = Vec::new();

    for item in items {
        let trimmed = item.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            cleaned.push(trimmed.to_string());
        }
    }

    cleaned
}

/// [`normalize_items`] followed by truncation to `cap` items
pub fn normalize_capped<I, S>(items: I, cap: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cleaned = normalize_items(items);
    cleaned.truncate(cap);
    cleaned
}
