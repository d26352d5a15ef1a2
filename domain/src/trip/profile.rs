//! Traveler taste profile

use crate::core::taste::Taste;
use serde::{Deserialize, Serialize};

/// Tastes shorter than this are ignored when gathering
pub const MIN_GATHERED_TASTE_LEN: usize = 3;
/// At most this many tastes are gathered for a phase
pub const MAX_GATHERED_TASTES: usize = 5;

/// Everything the traveler has told us about their tastes
///
/// `tastes` accumulates over a session (e.g. keywords extracted from chat),
/// while the per-field tastes come from explicit inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasteProfile {
    pub tastes: Vec<String>,
    pub music: Option<String>,
    pub food: Option<String>,
    pub fashion: Option<String>,
}

impl TasteProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tastes(mut self, tastes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tastes.extend(tastes.into_iter().map(Into::into));
        self
    }

    pub fn with_music(mut self, music: impl Into<String>) -> Self {
        self.music = Some(music.into());
        self
    }

    pub fn with_food(mut self, food: impl Into<String>) -> Self {
        self.food = Some(food.into());
        self
    }

    pub fn with_fashion(mut self, fashion: impl Into<String>) -> Self {
        self.fashion = Some(fashion.into());
        self
    }

    /// Add tastes learned during the session, skipping ones already known
    pub fn remember<'a>(&mut self, tastes: impl IntoIterator<Item = &'a Taste>) {
        for taste in tastes {
            if !self.tastes.iter().any(|t| t.trim() == taste.as_str()) {
                self.tastes.push(taste.as_str().to_string());
            }
        }
    }

    /// Tastes used by the packing and journey phases.
    ///
    /// Session tastes plus the music, food and fashion fields; blanks and
    /// duplicates removed, tastes under three characters dropped, at most five.
    pub fn gather(&self) -> Vec<Taste> {
        let fields = [&self.music, &self.food, &self.fashion];
        let candidates = self
            .tastes
            .iter()
            .map(String::as_str)
            .chain(fields.into_iter().flatten().map(String::as_str));

        Self::distinct(candidates)
            .into_iter()
            .filter(|t| t.char_len() >= MIN_GATHERED_TASTE_LEN)
            .take(MAX_GATHERED_TASTES)
            .collect()
    }

    /// Tastes used by the destination phase: session tastes plus the music
    /// and food fields, with no length filter or limit.
    pub fn destination_seeds(&self) -> Vec<Taste> {
        let fields = [&self.music, &self.food];
        let candidates = self
            .tastes
            .iter()
            .map(String::as_str)
            .chain(fields.into_iter().flatten().map(String::as_str));

        Self::distinct(candidates)
    }

    fn distinct<'a>(candidates: impl Iterator<Item = &'a str>) -> Vec<Taste> {
        let mut tastes: Vec<Taste> = Vec::new();
        for taste in candidates.filter_map(Taste::try_new) {
            if !tastes.contains(&taste) {
                tastes.push(taste);
            }
        }
        tastes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tastes: &[Taste]) -> Vec<&str> {
        tastes.iter().map(|t| t.as_str()).collect()
    }

    #[test]
    fn test_gather_combines_fields() {
        let profile = TasteProfile::new()
            .with_tastes(["anime", "jazz"])
            .with_music("city pop")
            .with_food("ramen")
            .with_fashion("streetwear");

        assert_eq!(
            names(&profile.gather()),
            vec!["anime", "jazz", "city pop", "ramen", "streetwear"]
        );
    }

    #[test]
    fn test_gather_filters_short_and_duplicates() {
        let profile = TasteProfile::new()
            .with_tastes(["ok", "jazz", "jazz", "", "  "])
            .with_music("jazz")
            .with_food("pho");

        assert_eq!(names(&profile.gather()), vec!["jazz", "pho"]);
    }

    #[test]
    fn test_gather_caps_at_five() {
        let profile = TasteProfile::new().with_tastes(["aaa", "bbb", "ccc", "ddd", "eee", "fff"]);
        assert_eq!(profile.gather().len(), MAX_GATHERED_TASTES);
    }

    #[test]
    fn test_destination_seeds_skip_fashion_and_keep_short() {
        let profile = TasteProfile::new()
            .with_tastes(["ok"])
            .with_food("tapas")
            .with_fashion("denim");

        assert_eq!(names(&profile.destination_seeds()), vec!["ok", "tapas"]);
    }

    #[test]
    fn test_remember_skips_known() {
        let mut profile = TasteProfile::new().with_tastes(["jazz"]);
        let learned = vec![
            Taste::try_new("jazz").unwrap(),
            Taste::try_new("sushi").unwrap(),
        ];
        profile.remember(&learned);
        assert_eq!(profile.tastes, vec!["jazz", "sushi"]);
    }
}
