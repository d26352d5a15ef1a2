//! Trip phase value object

use crate::core::category::Category;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Phase of a trip, in the order a traveler goes through them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TripPhase {
    /// Fix destination, duration and budget
    Plan,
    /// Outfits and brands to pack
    Pack,
    /// Entertainment and snacks for the way there
    Journey,
    /// Foods and places at the destination
    Destiny,
    /// Rating and feedback after coming home
    Return,
}

impl TripPhase {
    pub const ALL: [TripPhase; 5] = [
        TripPhase::Plan,
        TripPhase::Pack,
        TripPhase::Journey,
        TripPhase::Destiny,
        TripPhase::Return,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TripPhase::Plan => "PLAN",
            TripPhase::Pack => "PACK",
            TripPhase::Journey => "JOURNEY",
            TripPhase::Destiny => "DESTINY",
            TripPhase::Return => "RETURN",
        }
    }

    /// Categories whose recommendations feed this phase
    pub fn categories(&self) -> Vec<Category> {
        match self {
            TripPhase::Plan | TripPhase::Return => Vec::new(),
            TripPhase::Pack => vec![Category::Fashion, Category::Brand],
            TripPhase::Journey => vec![
                Category::Music,
                Category::Tv,
                Category::Movie,
                Category::Podcast,
                Category::Book,
                Category::Game,
                Category::Food,
            ],
            TripPhase::Destiny => vec![Category::Food, Category::Travel, Category::Place],
        }
    }

    pub fn next(&self) -> Option<TripPhase> {
        match self {
            TripPhase::Plan => Some(TripPhase::Pack),
            TripPhase::Pack => Some(TripPhase::Journey),
            TripPhase::Journey => Some(TripPhase::Destiny),
            TripPhase::Destiny => Some(TripPhase::Return),
            TripPhase::Return => None,
        }
    }

    /// Greeting shown when a trip conversation starts
    pub fn welcome_message() -> String {
        let names: Vec<&str> = TripPhase::ALL.iter().map(|p| p.as_str()).collect();
        format!(
            "Welcome! Progress through the phases: {}. Each step adapts based on your tastes.",
            names.join(", ")
        )
    }
}

impl std::fmt::Display for TripPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TripPhase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PLAN" => Ok(TripPhase::Plan),
            "PACK" => Ok(TripPhase::Pack),
            "JOURNEY" => Ok(TripPhase::Journey),
            "DESTINY" => Ok(TripPhase::Destiny),
            "RETURN" => Ok(TripPhase::Return),
            _ => Err(DomainError::UnknownPhase(s.to_string())),
        }
    }
}
