//! Application layer for tastetrip
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::RecommendationParams;
pub use ports::{
    generative_backend::{GenerationError, GenerativeBackend},
    progress::{NoProgress, ProgressNotifier},
    recommendation_source::{CategoryItems, SourceError, StructuredRecommendationSource},
    transcript_logger::{NoTranscript, Speaker, TranscriptEntry, TranscriptLogger},
    trip_repository::{RepositoryError, TripRepository},
};
pub use use_cases::aggregate_recommendations::{
    AggregateRecommendationsInput, AggregateRecommendationsUseCase,
};
pub use use_cases::extract_tastes::ExtractTastesUseCase;
pub use use_cases::fetch_structured::FetchStructuredUseCase;
pub use use_cases::generate_fallback::{FallbackResults, GenerateFallbackUseCase};
pub use use_cases::plan_trip::{PlanTripError, PlanTripUseCase};
