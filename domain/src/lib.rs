//! Domain layer for tastetrip
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Recommendations
//!
//! A [`Taste`] (e.g. "jazz") is looked up per [`Category`] (music, food, ...).
//! Results are normalized into a [`RecommendationSet`]: at most five items per
//! category, unique case-insensitively. Categories with fewer than two items
//! are considered insufficient and are topped up by a generative fallback,
//! batched per taste through [`TasteDomainPair`]s.
//!
//! ## Trips
//!
//! A trip moves through five [`TripPhase`]s. Each phase turns the
//! recommendations for the traveler's tastes into a plan
//! ([`PackingList`], [`JourneyKit`], [`DestinyHighlights`]).

pub mod config;
pub mod core;
pub mod prompt;
pub mod recommendation;
pub mod trip;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{category::Category, error::DomainError, taste::Taste};
pub use prompt::RecommendationPrompt;
pub use recommendation::{
    normalize::{MAX_ITEMS_PER_CATEGORY, SUFFICIENCY_THRESHOLD, normalize_capped, normalize_items},
    pair::{TasteDomainPair, group_by_taste},
    parsing::{parse_fallback_reply, parse_taste_list},
    set::RecommendationSet,
    stage::Stage,
};
pub use trip::{
    entities::{DEFAULT_TRIP_DAYS, Feedback, MAX_TRIP_DAYS, MIN_TRIP_DAYS, Trip},
    phase::TripPhase,
    plans::{DestinyHighlights, JourneyKit, PackingList, chat_reply},
    profile::TasteProfile,
};
