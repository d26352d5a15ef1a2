//! Scripted port implementations shared by the use case tests.

use crate::ports::generative_backend::{GenerationError, GenerativeBackend};
use crate::ports::recommendation_source::{CategoryItems, SourceError, StructuredRecommendationSource};
use crate::ports::transcript_logger::{TranscriptEntry, TranscriptLogger};
use crate::ports::trip_repository::{RepositoryError, TripRepository};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tastetrip_domain::{Category, Taste, Trip};

/// Structured source answering from a fixed table keyed by lower-cased taste
#[derive(Default)]
pub struct ScriptedSource {
    table: HashMap<String, CategoryItems>,
    failing: Vec<String>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, taste: &str, category: Category, items: &[&str]) -> Self {
        self.table
            .entry(taste.to_lowercase())
            .or_default()
            .insert(category, items.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn failing_for(mut self, taste: &str) -> Self {
        self.failing.push(taste.to_lowercase());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StructuredRecommendationSource for ScriptedSource {
    async fn recommend(&self, taste: &Taste) -> Result<CategoryItems, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&taste.key()) {
            return Err(SourceError::ConnectionError("scripted outage".to_string()));
        }
        Ok(self.table.get(&taste.key()).cloned().unwrap_or_default())
    }
}

/// Generative backend replaying scripted replies and recording prompts
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(self) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(GenerationError::RequestFailed("scripted".to_string())));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Other("No more replies".to_string())))
    }
}

/// In-memory trip storage
#[derive(Default)]
pub struct InMemoryTrips {
    pub trips: Mutex<Vec<Trip>>,
}

#[async_trait]
impl TripRepository for InMemoryTrips {
    async fn load_trips(&self) -> Result<Vec<Trip>, RepositoryError> {
        Ok(self.trips.lock().unwrap().clone())
    }

    async fn save_trips(&self, trips: &[Trip]) -> Result<(), RepositoryError> {
        *self.trips.lock().unwrap() = trips.to_vec();
        Ok(())
    }
}

/// Transcript collecting entries in memory
#[derive(Default)]
pub struct RecordingTranscript {
    pub entries: Mutex<Vec<TranscriptEntry>>,
}

impl TranscriptLogger for RecordingTranscript {
    fn record(&self, entry: TranscriptEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}
