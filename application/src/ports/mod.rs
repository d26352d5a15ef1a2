//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod generative_backend;
pub mod progress;
pub mod recommendation_source;
pub mod transcript_logger;
pub mod trip_repository;
