use super::stats::{summarize_items, summarize_timeline};
use super::views::{ProgressDashboard, TimelineStats};
use crate::store::DocumentStore;
use crate::workflows::tracking::domain::ItemFilter;
use crate::workflows::tracking::items::{ProgressError, ProgressItemStore};
use crate::workflows::tracking::timeline::{TimelineError, TimelineStore};

/// Read-only view over the stores. Holds no state of its own.
pub struct AggregationEngine<S> {
    items: ProgressItemStore<S>,
    timeline: TimelineStore<S>,
}

impl<S> AggregationEngine<S>
where
    S: DocumentStore + 'static,
{
    pub fn new(items: ProgressItemStore<S>, timeline: TimelineStore<S>) -> Self {
        Self { items, timeline }
    }

    pub async fn progress_dashboard(
        &self,
        user_id: &str,
    ) -> Result<ProgressDashboard, ProgressError> {
        let items = self.items.list(user_id, ItemFilter::default()).await?;
        Ok(summarize_items(&items))
    }

    pub async fn timeline_stats(&self) -> Result<TimelineStats, TimelineError> {
        let steps = self.timeline.list_all().await?;
        Ok(summarize_timeline(&steps))
    }
}
