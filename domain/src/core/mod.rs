//! Core domain concepts shared across all subdomains.
//!
//! - [`category::Category`]: the fixed recommendation topics (music, food, ...)
//! - [`taste::Taste`]: a validated user preference keyword
//! - [`error::DomainError`]: domain-level errors

pub mod category;
pub mod error;
pub mod taste;
