//! Recommendation subdomain.
//!
//! - [`normalize`]: trimming and case-insensitive deduplication of items
//! - [`set::RecommendationSet`]: per-category item lists
//! - [`pair::TasteDomainPair`]: batching unit for the generative fallback
//! - [`parsing`]: extraction of items from generative replies
//! - [`stage::Stage`]: pipeline stages reported to progress observers

pub mod normalize;
pub mod pair;
pub mod parsing;
pub mod set;
pub mod stage;
