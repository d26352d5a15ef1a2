//! Console output formatter for recommendations and trip phases

use colored::Colorize;
use serde::Serialize;
use tastetrip_domain::{
    DestinyHighlights, Feedback, JourneyKit, PackingList, RecommendationSet, Trip,
};

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Globally enable or disable ANSI colors
    pub fn set_color_enabled(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Format a recommendation set, one line per category in request order
    pub fn format_recommendations(taste: &str, set: &RecommendationSet) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Recommendations"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Taste:".cyan().bold(), taste));

        if set.is_empty() {
            output.push_str(&format!("\n{}\n", "Nothing to recommend.".dimmed()));
        }

        for (category, items) in set.iter() {
            let label = format!("{:<10}", category.display_name());
            if items.is_empty() {
                output.push_str(&format!("\n{} {}", label.yellow().bold(), "-".dimmed()));
            } else {
                output.push_str(&format!("\n{} {}", label.yellow().bold(), items.join(", ")));
            }
        }
        output.push('\n');

        output.push_str(&Self::footer());
        output
    }

    pub fn format_trip(trip: &Trip) -> String {
        format!(
            "{} {}\n  {} {}  {} {}  {} {}\n",
            "Trip:".cyan().bold(),
            trip.destination.bold(),
            "days".dimmed(),
            trip.days,
            "budget".dimmed(),
            trip.budget.as_deref().unwrap_or("N/A"),
            "locked".dimmed(),
            trip.timestamp.format("%Y-%m-%d %H:%M UTC")
        )
    }

    pub fn format_trips(trips: &[Trip]) -> String {
        if trips.is_empty() {
            return format!("{}\n", "No trips locked yet. Try `tastetrip plan <destination>`.".dimmed());
        }

        let mut output = Self::section_header(&format!("Locked trips ({})", trips.len()));
        for (i, trip) in trips.iter().enumerate() {
            output.push_str(&format!(
                "{:>3}. {:<20} {:>3} days  {}\n",
                i + 1,
                trip.destination,
                trip.days,
                trip.budget.as_deref().unwrap_or("-")
            ));
        }
        output
    }

    pub fn format_packing(list: &PackingList) -> String {
        Self::phase_block("PACK", &list.message())
    }

    pub fn format_journey(kit: &JourneyKit) -> String {
        Self::phase_block("JOURNEY", &kit.message())
    }

    pub fn format_destiny(highlights: &DestinyHighlights) -> String {
        let title = match &highlights.destination {
            Some(dest) => format!("DESTINY: {}", dest),
            None => "DESTINY".to_string(),
        };
        Self::phase_block(&title, &highlights.message())
    }

    pub fn format_feedback(feedback: &Feedback) -> String {
        let stars = "*".repeat(feedback.rating() as usize);
        format!(
            "{} {}/10 {}\n{}\n",
            "Rating:".cyan().bold(),
            feedback.rating(),
            stars.yellow(),
            feedback.thank_you_message()
        )
    }

    /// Format as JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn phase_block(title: &str, message: &str) -> String {
        format!(
            "{}\n{}\n",
            Self::section_header(title),
            Self::indent(message, "  ")
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tastetrip_domain::Category;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_recommendations_in_request_order() {
        plain();
        let mut set = RecommendationSet::new();
        set.insert(Category::Place, vec!["Blue Note".to_string()]);
        set.insert(Category::Music, vec!["Coltrane".to_string(), "Monk".to_string()]);
        set.insert(Category::Food, vec![]);

        let output = ConsoleFormatter::format_recommendations("jazz", &set);
        let place = output.find("Blue Note").unwrap();
        let music = output.find("Coltrane, Monk").unwrap();
        assert!(place < music);
        assert!(output.contains("Taste: jazz"));
    }

    #[test]
    fn test_json_keeps_category_keys() {
        let mut set = RecommendationSet::new();
        set.insert(Category::Music, vec!["Monk".to_string()]);
        let json = ConsoleFormatter::format_json(&set);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["music"][0], "Monk");
    }

    #[test]
    fn test_trips_listing() {
        plain();
        assert!(ConsoleFormatter::format_trips(&[]).contains("No trips"));

        let trip = Trip::new("Tokyo", 5, None).unwrap();
        let output = ConsoleFormatter::format_trips(&[trip]);
        assert!(output.contains("Locked trips (1)"));
        assert!(output.contains("Tokyo"));
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
