//! Use cases (application services)
//!
//! Use cases orchestrate domain logic and coordinate with ports.

pub mod aggregate_recommendations;
pub mod extract_tastes;
pub mod fetch_structured;
pub mod generate_fallback;
pub mod plan_trip;
