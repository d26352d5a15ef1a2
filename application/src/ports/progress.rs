//! Progress notification port
//!
//! Defines the interface for reporting progress during recommendation
//! aggregation.

use tastetrip_domain::{Category, Stage};

/// Callback for progress updates during aggregation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain text, ...).
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: Stage, total_tasks: usize);

    /// Called when one category finishes within a stage
    fn on_category_complete(&self, stage: Stage, category: Category, item_count: usize);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: Stage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _total_tasks: usize) {}
    fn on_category_complete(&self, _stage: Stage, _category: Category, _item_count: usize) {}
    fn on_stage_complete(&self, _stage: Stage) {}
}
