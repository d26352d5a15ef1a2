//! Phase plans built from recommendation sets.
//!
//! Each plan absorbs one [`RecommendationSet`] per taste and renders the
//! assistant message for its phase. Items keep discovery order across
//! tastes and are deduplicated case-insensitively.

use crate::core::category::Category;
use crate::core::taste::Taste;
use crate::recommendation::normalize::{MAX_ITEMS_PER_CATEGORY, normalize_capped, normalize_items};
use crate::recommendation::set::RecommendationSet;
use serde::Serialize;

/// Upper bound on packed outfits regardless of trip length
pub const MAX_OUTFITS: usize = 10;
/// Upper bound on journey entertainment items
pub const MAX_ENTERTAINMENT: usize = 10;

const JOURNEY_ENTERTAINMENT: [Category; 6] = [
    Category::Music,
    Category::Tv,
    Category::Movie,
    Category::Podcast,
    Category::Book,
    Category::Game,
];

/// Outfits and brands for the PACK phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PackingList {
    pub outfits: Vec<String>,
    pub brands: Vec<String>,
    #[serde(skip)]
    max_outfits: usize,
}

impl PackingList {
    /// One outfit per day, never more than [`MAX_OUTFITS`]
    pub fn for_days(days: u32) -> Self {
        Self {
            outfits: Vec::new(),
            brands: Vec::new(),
            max_outfits: (days as usize).min(MAX_OUTFITS),
        }
    }

    pub fn max_outfits(&self) -> usize {
        self.max_outfits
    }

    pub fn absorb(&mut self, set: &RecommendationSet) {
        self.outfits = normalize_items(self.outfits.iter().chain(set.items(Category::Fashion)));
        self.brands = normalize_items(self.brands.iter().chain(set.items(Category::Brand)));
    }

    /// True once enough outfits are collected; remaining tastes can be skipped
    pub fn is_full(&self) -> bool {
        self.outfits.len() >= self.max_outfits
    }

    /// Apply the final caps
    pub fn finish(mut self) -> Self {
        self.outfits.truncate(self.max_outfits);
        self.brands.truncate(MAX_ITEMS_PER_CATEGORY);
        self
    }

    pub fn message(&self) -> String {
        let mut lines = Vec::new();
        if !self.outfits.is_empty() {
            lines.push(format!("Pack these outfits: {}", self.outfits.join(", ")));
        }
        if !self.brands.is_empty() {
            lines.push(format!("Brands to try: {}", self.brands.join(", ")));
        }
        if lines.is_empty() {
            "No fashion/brand suggestions yet. Add more tastes!".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Entertainment and snacks for the JOURNEY phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JourneyKit {
    pub entertainment: Vec<String>,
    pub foods: Vec<String>,
}

impl JourneyKit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, set: &RecommendationSet) {
        let found = JOURNEY_ENTERTAINMENT
            .iter()
            .flat_map(|c| set.items(*c).iter());
        self.entertainment = normalize_items(self.entertainment.iter().chain(found));
        self.foods = normalize_items(self.foods.iter().chain(set.items(Category::Food)));
    }

    pub fn finish(mut self) -> Self {
        self.entertainment.truncate(MAX_ENTERTAINMENT);
        self.foods.truncate(MAX_ITEMS_PER_CATEGORY);
        self
    }

    pub fn message(&self) -> String {
        let mut lines = Vec::new();
        if !self.entertainment.is_empty() {
            lines.push(format!("Entertainment: {}", self.entertainment.join(", ")));
        }
        if !self.foods.is_empty() {
            lines.push(format!("Travel foods: {}", self.foods.join(", ")));
        }
        if lines.is_empty() {
            "No travel recommendations yet. Add your tastes to get suggestions!".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Local foods and must-visit places for the DESTINY phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DestinyHighlights {
    pub destination: Option<String>,
    pub foods: Vec<String>,
    pub places: Vec<String>,
}

impl DestinyHighlights {
    pub fn new(destination: Option<String>) -> Self {
        Self {
            destination: destination
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            ..Self::default()
        }
    }

    pub fn absorb(&mut self, set: &RecommendationSet) {
        self.foods = normalize_items(self.foods.iter().chain(set.items(Category::Food)));
        let found = set
            .items(Category::Travel)
            .iter()
            .chain(set.items(Category::Place));
        self.places = normalize_items(self.places.iter().chain(found));
    }

    /// Cap both lists; the destination itself leads the places when missing
    pub fn finish(mut self) -> Self {
        self.foods.truncate(MAX_ITEMS_PER_CATEGORY);
        let mut places = normalize_capped(&self.places, MAX_ITEMS_PER_CATEGORY);
        if let Some(dest) = &self.destination
            && !places.contains(dest)
        {
            places.insert(0, dest.clone());
            places.truncate(MAX_ITEMS_PER_CATEGORY);
        }
        self.places = places;
        self
    }

    pub fn message(&self) -> String {
        let mut lines = Vec::new();
        if !self.foods.is_empty() {
            lines.push(format!("Try local foods: {}", self.foods.join(", ")));
        }
        if !self.places.is_empty() {
            lines.push(format!("Must-visit places: {}", self.places.join(", ")));
        }
        if lines.is_empty() {
            "Tell me about your food or place tastes to get better recommendations!".to_string()
        } else {
            lines.join("\n")
        }
    }
}

/// Reply to a free-form chat message, one entry per extracted taste
pub fn chat_reply(results: &[(Taste, RecommendationSet)]) -> String {
    if results.is_empty() {
        return "Enjoy your trip!".to_string();
    }

    let mut reply = String::new();
    for (taste, set) in results {
        if set.is_empty() {
            reply.push_str(&format!("I'll remember {} for the next phases! ", taste));
            continue;
        }

        reply.push_str(&format!("Tips for **{}**: ", taste));
        for (category, items) in set.iter() {
            reply.push_str(&format!(
                "{}: {}; ",
                category.display_name(),
                normalize_items(items).join(", ")
            ));
        }
    }

    reply.trim_end().to_string()
}
