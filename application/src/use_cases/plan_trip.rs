//! Plan Trip use case
//!
//! Drives the five trip phases on top of recommendation aggregation:
//!
//! | Phase | Operation | Categories |
//! |-------|-----------|------------|
//! | PLAN | [`lock_plan`](PlanTripUseCase::lock_plan) | - |
//! | PACK | [`pack`](PlanTripUseCase::pack) | fashion, brand |
//! | JOURNEY | [`journey`](PlanTripUseCase::journey) | music, tv, movie, podcast, book, game, food |
//! | DESTINY | [`destiny`](PlanTripUseCase::destiny) | food, travel, place |
//! | RETURN | [`feedback`](PlanTripUseCase::feedback) | - |
//!
//! Free-form messages go through [`chat`](PlanTripUseCase::chat).

use crate::ports::progress::ProgressNotifier;
use crate::ports::transcript_logger::{NoTranscript, TranscriptEntry, TranscriptLogger};
use crate::ports::trip_repository::{RepositoryError, TripRepository};
use crate::use_cases::aggregate_recommendations::AggregateRecommendationsUseCase;
use crate::use_cases::extract_tastes::ExtractTastesUseCase;
use std::sync::Arc;
use tastetrip_domain::{
    DestinyHighlights, DomainError, Feedback, JourneyKit, PackingList, RecommendationSet, Taste,
    TasteProfile, Trip, TripPhase, chat_reply,
};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while planning a trip
#[derive(Error, Debug)]
pub enum PlanTripError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Trip storage failed: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for the phase-by-phase trip conversation
#[derive(Clone)]
pub struct PlanTripUseCase {
    aggregator: AggregateRecommendationsUseCase,
    extractor: ExtractTastesUseCase,
    repository: Arc<dyn TripRepository>,
    transcript: Arc<dyn TranscriptLogger>,
}

impl PlanTripUseCase {
    pub fn new(
        aggregator: AggregateRecommendationsUseCase,
        extractor: ExtractTastesUseCase,
        repository: Arc<dyn TripRepository>,
    ) -> Self {
        Self {
            aggregator,
            extractor,
            repository,
            transcript: Arc::new(NoTranscript),
        }
    }

    /// Create with a transcript logger.
    pub fn with_transcript(mut self, transcript: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = transcript;
        self
    }

    pub fn aggregator(&self) -> &AggregateRecommendationsUseCase {
        &self.aggregator
    }

    // ==================== PLAN ====================

    /// Validate the plan, append it to the stored trips and confirm.
    pub async fn lock_plan(
        &self,
        destination: &str,
        days: u32,
        budget: Option<String>,
    ) -> Result<Trip, PlanTripError> {
        let trip = Trip::new(destination, days, budget)?;

        let mut trips = self.repository.load_trips().await?;
        trips.push(trip.clone());
        self.repository.save_trips(&trips).await?;
        info!("Locked trip to {} ({} stored trips)", trip.destination, trips.len());

        self.say(TripPhase::Plan, trip.lock_message());
        Ok(trip)
    }

    /// All stored trips, oldest first
    pub async fn trips(&self) -> Result<Vec<Trip>, PlanTripError> {
        Ok(self.repository.load_trips().await?)
    }

    /// The most recently locked trip, if any
    pub async fn latest_trip(&self) -> Result<Option<Trip>, PlanTripError> {
        Ok(self.repository.load_trips().await?.pop())
    }

    // ==================== PACK ====================

    /// Outfits and brands for the gathered tastes.
    ///
    /// Tastes are processed in order and the remaining ones are skipped once
    /// there is an outfit for every day.
    pub async fn pack(
        &self,
        profile: &TasteProfile,
        days: u32,
        progress: &dyn ProgressNotifier,
    ) -> PackingList {
        let categories = TripPhase::Pack.categories();
        let mut list = PackingList::for_days(days);

        for taste in profile.gather() {
            let set = self.aggregator.recommend(&taste, &categories, progress).await;
            list.absorb(&set);
            if list.is_full() {
                debug!("Packing list full after '{}'", taste);
                break;
            }
        }

        let list = list.finish();
        self.say(TripPhase::Pack, list.message());
        list
    }

    // ==================== JOURNEY ====================

    /// Entertainment and travel snacks for the gathered tastes
    pub async fn journey(
        &self,
        profile: &TasteProfile,
        progress: &dyn ProgressNotifier,
    ) -> JourneyKit {
        let categories = TripPhase::Journey.categories();
        let mut kit = JourneyKit::new();

        for taste in profile.gather() {
            let set = self.aggregator.recommend(&taste, &categories, progress).await;
            kit.absorb(&set);
        }

        let kit = kit.finish();
        self.say(TripPhase::Journey, kit.message());
        kit
    }

    // ==================== DESTINY ====================

    /// Local foods and must-visit places around the destination
    pub async fn destiny(
        &self,
        profile: &TasteProfile,
        destination: Option<String>,
        progress: &dyn ProgressNotifier,
    ) -> DestinyHighlights {
        let categories = TripPhase::Destiny.categories();
        let mut highlights = DestinyHighlights::new(destination);

        for taste in profile.destination_seeds() {
            let set = self.aggregator.recommend(&taste, &categories, progress).await;
            highlights.absorb(&set);
        }

        let highlights = highlights.finish();
        self.say(TripPhase::Destiny, highlights.message());
        highlights
    }

    // ==================== RETURN ====================

    pub fn feedback(&self, rating: u8, comment: &str) -> Result<Feedback, PlanTripError> {
        let feedback = Feedback::new(rating, comment)?;
        info!("Trip rated {}/10", feedback.rating());
        self.transcript
            .record(TranscriptEntry::user(comment).in_phase(TripPhase::Return));
        self.say(TripPhase::Return, feedback.thank_you_message());
        Ok(feedback)
    }

    // ==================== Chat ====================

    /// Answer a free-form message.
    ///
    /// Extracted tastes get the default aggregation each and are remembered
    /// in the profile for later phases.
    pub async fn chat(
        &self,
        profile: &mut TasteProfile,
        message: &str,
        progress: &dyn ProgressNotifier,
    ) -> String {
        self.transcript.record(TranscriptEntry::user(message));

        let tastes = self.extractor.execute(message).await;
        let categories = self.aggregator.params().default_categories.clone();

        let mut results: Vec<(Taste, RecommendationSet)> = Vec::with_capacity(tastes.len());
        for taste in &tastes {
            let set = self.aggregator.recommend(taste, &categories, progress).await;
            results.push((taste.clone(), set));
        }
        profile.remember(&tastes);

        let reply = chat_reply(&results);
        self.transcript.record(TranscriptEntry::assistant(reply.as_str()));
        reply
    }

    fn say(&self, phase: TripPhase, message: impl Into<String>) {
        self.transcript
            .record(TranscriptEntry::assistant(message).in_phase(phase));
    }
}
