//! Trip domain entities

use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shortest allowed trip, in days
pub const MIN_TRIP_DAYS: u32 = 1;
/// Longest allowed trip, in days
pub const MAX_TRIP_DAYS: u32 = 60;
/// Trip length used when none is given
pub const DEFAULT_TRIP_DAYS: u32 = 3;

/// A locked-in trip plan (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub destination: String,
    pub days: u32,
    /// Free-text budget, e.g. "1500 EUR"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    /// When the plan was locked
    pub timestamp: DateTime<Utc>,
}

impl Trip {
    /// Create a trip locked at the current time
    pub fn new(
        destination: impl Into<String>,
        days: u32,
        budget: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::locked_at(destination, days, budget, Utc::now())
    }

    /// Create a trip locked at a given time
    pub fn locked_at(
        destination: impl Into<String>,
        days: u32,
        budget: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let destination = destination.into().trim().to_string();
        if destination.is_empty() {
            return Err(DomainError::InvalidTrip(
                "destination cannot be empty".to_string(),
            ));
        }
        if !(MIN_TRIP_DAYS..=MAX_TRIP_DAYS).contains(&days) {
            return Err(DomainError::InvalidTrip(format!(
                "days must be between {} and {}, got {}",
                MIN_TRIP_DAYS, MAX_TRIP_DAYS, days
            )));
        }

        let budget = budget
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());

        Ok(Self {
            destination,
            days,
            budget,
            timestamp,
        })
    }

    /// Confirmation shown once the plan is locked
    pub fn lock_message(&self) -> String {
        format!(
            "Your trip to **{}** for **{} days** is locked in! (Budget: {})",
            self.destination,
            self.days,
            self.budget.as_deref().unwrap_or("N/A")
        )
    }
}

/// Post-trip rating and comments (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    rating: u8,
    comment: String,
}

impl Feedback {
    pub fn new(rating: u8, comment: impl Into<String>) -> Result<Self, DomainError> {
        if !(1..=10).contains(&rating) {
            return Err(DomainError::InvalidFeedback(format!(
                "rating must be between 1 and 10, got {}",
                rating
            )));
        }
        Ok(Self {
            rating,
            comment: comment.into(),
        })
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn thank_you_message(&self) -> &'static str {
        "Thanks for your feedback! Glad you travelled with us."
    }
}
