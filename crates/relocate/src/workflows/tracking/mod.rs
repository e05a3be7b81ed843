//! Relocation progress tracking: per-user checklist items with sub-tasks, the
//! shared milestone timeline, derived dashboard statistics, and the
//! coordinator that owns every mutation.

mod blueprint;
pub mod coordinator;
pub mod domain;
pub mod items;
pub mod report;
pub mod router;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use blueprint::{
    BlueprintError, ChecklistBlueprint, ItemTemplate, StepTemplate, TimelineBlueprint,
};
pub use coordinator::{parse_patch, TrackingError, UpdateCoordinator};
pub use domain::{
    ItemFilter, ItemId, NewProgressItem, Priority, ProgressItem, ProgressPatch, ProgressStatus,
    StepId, Subtask, TimelineStep, UnknownStatus,
};
pub use items::{ProgressError, ProgressItemStore};
pub use report::views::{AggregateStatistics, ProgressDashboard, StepCounts, TimelineStats};
pub use report::AggregationEngine;
pub use router::tracking_router;
pub use timeline::{TimelineError, TimelineStore};
