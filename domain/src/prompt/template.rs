//! Prompt templates for the generative backend

use crate::core::category::Category;
use crate::core::taste::Taste;

/// Templates for the prompts sent to the generative backend
pub struct RecommendationPrompt;

impl RecommendationPrompt {
    /// Batched fallback prompt: one request per taste covering every
    /// insufficient category, answered as `category: item1, item2` lines.
    pub fn fallback(taste: &Taste, categories: &[Category], items_per_category: usize) -> String {
        let names: Vec<&str> = categories.iter().map(|c| c.as_str()).collect();
        let placeholders: Vec<String> = (1..=items_per_category.max(1))
            .map(|i| format!("item{}", i))
            .collect();
        let placeholders = placeholders.join(", ");

        let mut prompt = format!(
            "A person likes '{}'. Suggest up to {} popular {} items for a traveler.\n",
            taste,
            items_per_category,
            names.join(", ")
        );

        let example_lines: Vec<String> = names
            .iter()
            .map(|name| format!("{}: {}", name, placeholders))
            .collect();
        prompt.push_str(&example_lines.join("\n"));

        prompt.push_str(
            "\n\nOnly respond with category names followed by items separated by commas.",
        );

        prompt
    }

    /// Prompt asking the backend to pull taste keywords out of a chat message
    pub fn taste_extraction(message: &str) -> String {
        format!(
            r#"Extract up to 5 short taste keywords (artists, genres, cuisines, dishes, styles, brands, places, shows) from the traveler's message below.

Message:
{}

Respond with a single comma-separated line of keywords and nothing else. If there are none, respond with NONE."#,
            message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_prompt_lists_every_category() {
        let taste = Taste::try_new("jazz").unwrap();
        let prompt = RecommendationPrompt::fallback(&taste, &[Category::Music, Category::Food], 3);

        assert!(prompt.starts_with(
            "A person likes 'jazz'. Suggest up to 3 popular music, food items for a traveler.\n"
        ));
        assert!(prompt.contains("music: item1, item2, item3\nfood: item1, item2, item3"));
        assert!(prompt.ends_with(
            "Only respond with category names followed by items separated by commas."
        ));
    }

    #[test]
    fn test_fallback_prompt_item_count() {
        let taste = Taste::try_new("anime").unwrap();
        let prompt = RecommendationPrompt::fallback(&taste, &[Category::Tv], 2);
        assert!(prompt.contains("tv: item1, item2\n"));
        assert!(!prompt.contains("item3"));
    }

    #[test]
    fn test_taste_extraction_embeds_message() {
        let prompt = RecommendationPrompt::taste_extraction("I love ramen and city pop");
        assert!(prompt.contains("I love ramen and city pop"));
        assert!(prompt.contains("NONE"));
    }
}
