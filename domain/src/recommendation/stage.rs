//! Aggregation pipeline stages

use serde::{Deserialize, Serialize};

/// Stage of a recommendation aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Concurrent structured lookup, one task per category
    Fetch,
    /// Generative fallback for insufficient categories
    Fallback,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Fetch => "fetch",
            Stage::Fallback => "fallback",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Stage::Fetch => "Structured Lookup",
            Stage::Fallback => "Generative Fallback",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
