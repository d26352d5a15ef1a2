//! Recommendation category value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A fixed recommendation topic (Value Object)
///
/// Categories are the keys of a [`RecommendationSet`](crate::RecommendationSet)
/// and the unit of fan-out when querying the structured source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Music,
    Food,
    Fashion,
    Movie,
    Travel,
    Place,
    Brand,
    Tv,
    Podcast,
    Book,
    Game,
}

impl Category {
    /// Every known category, in declaration order
    pub const ALL: [Category; 11] = [
        Category::Music,
        Category::Food,
        Category::Fashion,
        Category::Movie,
        Category::Travel,
        Category::Place,
        Category::Brand,
        Category::Tv,
        Category::Podcast,
        Category::Book,
        Category::Game,
    ];

    /// Categories queried when the caller does not ask for specific ones
    pub fn default_set() -> Vec<Category> {
        vec![
            Category::Music,
            Category::Food,
            Category::Fashion,
            Category::Movie,
            Category::Travel,
            Category::Place,
        ]
    }

    /// Lower-case wire name, as used in prompts, replies and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Music => "music",
            Category::Food => "food",
            Category::Fashion => "fashion",
            Category::Movie => "movie",
            Category::Travel => "travel",
            Category::Place => "place",
            Category::Brand => "brand",
            Category::Tv => "tv",
            Category::Podcast => "podcast",
            Category::Book => "book",
            Category::Game => "game",
        }
    }

    /// Title-cased name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Music => "Music",
            Category::Food => "Food",
            Category::Fashion => "Fashion",
            Category::Movie => "Movie",
            Category::Travel => "Travel",
            Category::Place => "Place",
            Category::Brand => "Brand",
            Category::Tv => "Tv",
            Category::Podcast => "Podcast",
            Category::Book => "Book",
            Category::Game => "Game",
        }
    }

    /// Exact match against the lower-case wire name.
    ///
    /// Used by reply parsing, where the label has already been trimmed and
    /// lower-cased and no aliasing is wanted.
    pub fn from_wire(label: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Category::from_wire(&label).ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
