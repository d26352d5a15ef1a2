//! Application-level configuration.
//!
//! - [`RecommendationParams`]: limits and defaults for recommendation aggregation

pub mod recommendation_params;

pub use recommendation_params::RecommendationParams;
