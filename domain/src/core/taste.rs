//! Taste value object

use serde::{Deserialize, Serialize};

/// A user preference keyword (Value Object)
///
/// Represents the seed of a recommendation query, e.g. `"jazz"` or
/// `"street food"`. The content is stored trimmed and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taste {
    content: String,
}

impl Taste {
    /// Try to create a new taste, returning None if the content is blank
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let content = content.as_ref().trim();
        if content.is_empty() {
            None
        } else {
            Some(Self {
                content: content.to_string(),
            })
        }
    }

    /// Get the taste content
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Number of characters (not bytes) in the taste
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Lower-cased key, for case-insensitive lookups and caching
    pub fn key(&self) -> String {
        self.content.to_lowercase()
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Taste {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
