use super::views::{AggregateStatistics, ProgressDashboard, StepCounts, TimelineStats};
use crate::workflows::tracking::domain::{ProgressItem, ProgressStatus, TimelineStep};

/// `completed / total * 100` rounded to one decimal; zero when `total` is zero.
pub fn completion_percentage(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let ratio = completed as f64 / total as f64;
    (ratio * 1000.0).round() / 10.0
}

impl AggregateStatistics {
    fn record(&mut self, status: ProgressStatus) {
        self.total_items += 1;
        match status {
            ProgressStatus::NotStarted => self.not_started_items += 1,
            ProgressStatus::InProgress => self.in_progress_items += 1,
            ProgressStatus::Completed => self.completed_items += 1,
        }
    }

    fn finish(mut self) -> Self {
        self.completion_percentage = completion_percentage(self.completed_items, self.total_items);
        self
    }
}

/// Single pass over a user's items.
pub fn summarize_items(items: &[ProgressItem]) -> ProgressDashboard {
    let mut dashboard = ProgressDashboard::default();

    for item in items {
        dashboard.overview.record(item.status);
        dashboard
            .by_category
            .entry(item.category.clone())
            .or_default()
            .record(item.status);
    }

    ProgressDashboard {
        overview: dashboard.overview.finish(),
        by_category: dashboard
            .by_category
            .into_iter()
            .map(|(category, stats)| (category, stats.finish()))
            .collect(),
    }
}

pub fn summarize_timeline(steps: &[TimelineStep]) -> TimelineStats {
    let mut stats = TimelineStats::default();

    for step in steps {
        let entry = stats
            .by_category
            .entry(step.category.to_string())
            .or_insert_with(StepCounts::default);
        entry.total_steps += 1;
        stats.total_steps += 1;
        if step.is_completed {
            entry.completed_steps += 1;
            stats.completed_steps += 1;
        }
    }

    stats.completion_percentage = completion_percentage(stats.completed_steps, stats.total_steps);
    stats
}
