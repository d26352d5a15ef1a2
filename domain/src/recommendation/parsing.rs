//! Reply parsing for the generative fallback.
//!
//! These functions extract per-category item lists from free-form model
//! replies. They are pure domain logic: no I/O, just text pattern matching.
//!
//! # Accepted formats
//!
//! | Format | Example |
//! |--------|---------|
//! | JSON object (whole reply or fenced block) | `{"music": ["jazz", "rock"], "food": ["sushi"]}` |
//! | Category lines | `music: jazz, rock` |
//!
//! Anything that does not match a requested category is ignored.

use super::normalize::{MAX_ITEMS_PER_CATEGORY, normalize_capped};
use crate::core::category::Category;
use std::collections::HashMap;

/// Parse a fallback reply into items per requested category.
///
/// When the whole reply (or a fenced code block) is a single JSON object,
/// its requested categories are taken from it and line parsing only fills
/// categories the object leaves out. Any other reply is parsed line by line:
///
/// - each line is split on its first `:`; lines without one are skipped
/// - the left side, trimmed and lower-cased, must name a requested category
/// - the right side is split on `,`, trimmed, blanks dropped, capped at 5
///
/// A later line for the same category replaces an earlier one.
///
/// # Examples
///
/// ```
/// use tastetrip_domain::Category;
/// use tastetrip_domain::recommendation::parsing::parse_fallback_reply;
///
/// let parsed = parse_fallback_reply(
///     "music: jazz, rock, pop\nfood: sushi",
///     &[Category::Music, Category::Food],
/// );
/// assert_eq!(parsed[&Category::Music], vec!["jazz", "rock", "pop"]);
/// assert_eq!(parsed[&Category::Food], vec!["sushi"]);
/// ```
pub fn parse_fallback_reply(reply: &str, requested: &[Category]) -> HashMap<Category, Vec<String>> {
    let lines = parse_line_reply(reply, requested);
    let Some(mut parsed) = parse_json_reply(reply, requested) else {
        return lines;
    };

    for (category, items) in lines {
        parsed.entry(category).or_insert(items);
    }
    parsed
}

/// Line-oriented `category: item, item` parsing
pub fn parse_line_reply(reply: &str, requested: &[Category]) -> HashMap<Category, Vec<String>> {
    let mut results = HashMap::new();

    for line in reply.lines() {
        let Some((label, items_str)) = line.split_once(':') else {
            continue;
        };

        let label = label.trim().to_lowercase();
        let Some(category) = Category::from_wire(&label).filter(|c| requested.contains(c)) else {
            continue;
        };

        let mut items: Vec<String> = items_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        items.truncate(MAX_ITEMS_PER_CATEGORY);

        results.insert(category, items);
    }

    results
}

/// Strictly structured reply: a JSON object whose keys are categories and
/// whose values are arrays of strings (or one comma-separated string).
///
/// Returns `None` unless the trimmed reply, or the body of a fenced code
/// block, is exactly one JSON object.
pub fn parse_json_reply(
    reply: &str,
    requested: &[Category],
) -> Option<HashMap<Category, Vec<String>>> {
    let body = json_object_body(reply)?;
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = parsed.as_object()?;

    let mut results = HashMap::new();
    for (key, value) in object {
        let label = key.trim().to_lowercase();
        let Some(category) = Category::from_wire(&label).filter(|c| requested.contains(c)) else {
            continue;
        };

        let raw: Vec<String> = match value {
            serde_json::Value::Array(values) => values
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            serde_json::Value::String(s) => s.split(',').map(str::to_string).collect(),
            _ => continue,
        };

        let items: Vec<String> = raw
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .take(MAX_ITEMS_PER_CATEGORY)
            .collect();

        results.insert(category, items);
    }

    Some(results)
}

fn json_object_body(reply: &str) -> Option<&str> {
    let trimmed = reply.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Some(trimmed);
    }

    let (_, after_fence) = reply.split_once("```")?;
    let (block, _) = after_fence.split_once("```")?;
    let block = block.strip_prefix("json").unwrap_or(block).trim();
    (block.starts_with('{') && block.ends_with('}')).then_some(block)
}

/// Parse a taste-extraction reply into at most five distinct tastes.
///
/// The reply is expected to be a comma-separated list; newlines and
/// leading list bullets are tolerated, and `NONE` means nothing was found.
pub fn parse_taste_list(reply: &str) -> Vec<String> {
    let candidates = reply
        .split([',', '\n'])
        .map(|s| {
            s.trim()
                .trim_start_matches(['-', '*', '•'])
                .trim()
                .trim_matches(['"', '\'', '.'])
                .trim()
        })
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("none"));

    normalize_capped(candidates, MAX_ITEMS_PER_CATEGORY)
}
