//! Port for recording the trip conversation transcript.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! diagnostic messages, while this port captures what the traveler and the
//! assistant said to each other, in a machine-readable format (JSONL).

use serde::Serialize;
use tastetrip_domain::TripPhase;

/// Who said something in the trip conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// One turn of the conversation
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    /// Phase the traveler was in, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<TripPhase>,
    pub message: String,
}

impl TranscriptEntry {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            phase: None,
            message: message.into(),
        }
    }

    pub fn assistant(message: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            phase: None,
            message: message.into(),
        }
    }

    pub fn in_phase(mut self, phase: TripPhase) -> Self {
        self.phase = Some(phase);
        self
    }
}

/// Records conversation turns.
///
/// `record` is synchronous and non-fallible so transcript problems never
/// disrupt the conversation; implementations swallow write failures.
pub trait TranscriptLogger: Send + Sync {
    fn record(&self, entry: TranscriptEntry);
}

/// No-op implementation for tests and when transcripts are disabled.
pub struct NoTranscript;

impl TranscriptLogger for NoTranscript {
    fn record(&self, _entry: TranscriptEntry) {}
}
