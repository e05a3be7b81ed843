use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateStatistics {
    pub total_items: usize,
    pub completed_items: usize,
    pub in_progress_items: usize,
    pub not_started_items: usize,
    /// Percentage of completed items, one decimal place.
    pub completion_percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressDashboard {
    pub overview: AggregateStatistics,
    pub by_category: BTreeMap<String, AggregateStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StepCounts {
    pub total_steps: usize,
    pub completed_steps: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineStats {
    pub total_steps: usize,
    pub completed_steps: usize,
    pub completion_percentage: f64,
    pub by_category: BTreeMap<String, StepCounts>,
}
