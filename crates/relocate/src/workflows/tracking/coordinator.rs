use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use super::blueprint::{ChecklistBlueprint, TimelineBlueprint};
use super::domain::{
    ItemFilter, ItemId, Priority, ProgressItem, ProgressPatch, ProgressStatus, StepId,
    TimelineStep,
};
use super::items::{ProgressError, ProgressItemStore};
use super::report::views::{ProgressDashboard, TimelineStats};
use super::report::AggregationEngine;
use super::timeline::{TimelineError, TimelineStore};
use crate::store::{DocumentStore, StoreError};

/// Entry point for every checklist and timeline operation.
///
/// Validation happens before any write, and each mutating call issues at most
/// one store write, so a failed call leaves no partial changes behind.
pub struct UpdateCoordinator<S> {
    items: ProgressItemStore<S>,
    timeline: TimelineStore<S>,
    engine: AggregationEngine<S>,
    checklist: Arc<ChecklistBlueprint>,
}

impl<S> UpdateCoordinator<S>
where
    S: DocumentStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_blueprints(
            store,
            TimelineBlueprint::standard(),
            ChecklistBlueprint::standard(),
        )
    }

    pub fn with_blueprints(
        store: Arc<S>,
        timeline: TimelineBlueprint,
        checklist: ChecklistBlueprint,
    ) -> Self {
        let items = ProgressItemStore::new(Arc::clone(&store));
        let timeline = TimelineStore::new(store, timeline);
        let engine = AggregationEngine::new(items.clone(), timeline.clone());

        Self {
            items,
            timeline,
            engine,
            checklist: Arc::new(checklist),
        }
    }

    pub fn items(&self) -> &ProgressItemStore<S> {
        &self.items
    }

    /// List a user's items. An unrecognised status filter matches nothing.
    pub async fn list_items(
        &self,
        user_id: &str,
        category: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<ProgressItem>, TrackingError> {
        let status = match status.map(str::parse::<ProgressStatus>) {
            Some(Ok(status)) => Some(status),
            Some(Err(_)) => return Ok(Vec::new()),
            None => None,
        };

        let filter = ItemFilter { category, status };
        Ok(self.items.list(user_id, filter).await?)
    }

    pub async fn get_item(&self, item_id: &ItemId) -> Result<ProgressItem, TrackingError> {
        Ok(self.items.get(item_id).await?)
    }

    /// Validate a raw JSON patch and apply it.
    pub async fn update_item(
        &self,
        item_id: &ItemId,
        body: &Value,
    ) -> Result<ProgressItem, TrackingError> {
        let patch = parse_patch(body)?;
        self.apply_patch(item_id, &patch).await
    }

    pub async fn apply_patch(
        &self,
        item_id: &ItemId,
        patch: &ProgressPatch,
    ) -> Result<ProgressItem, TrackingError> {
        let item = self.items.update(item_id, patch).await?;
        if !patch.is_empty() {
            info!(item_id = %item_id, status = item.status.as_str(), "progress item saved");
        }
        Ok(item)
    }

    pub async fn toggle_subtask(
        &self,
        item_id: &ItemId,
        index: i64,
    ) -> Result<ProgressItem, TrackingError> {
        let Ok(position) = usize::try_from(index) else {
            let len = self.items.get(item_id).await?.subtasks.len();
            return Err(TrackingError::IndexOutOfRange { index, len });
        };

        let item = self.items.toggle_subtask(item_id, position).await?;
        info!(item_id = %item_id, index = position, "sub-task toggled");
        Ok(item)
    }

    pub async fn progress_dashboard(
        &self,
        user_id: &str,
    ) -> Result<ProgressDashboard, TrackingError> {
        Ok(self.engine.progress_dashboard(user_id).await?)
    }

    pub async fn list_timeline(&self) -> Result<Vec<TimelineStep>, TrackingError> {
        Ok(self.timeline.list_all().await?)
    }

    pub async fn timeline_by_category(
        &self,
    ) -> Result<BTreeMap<String, Vec<TimelineStep>>, TrackingError> {
        Ok(self.timeline.list_by_category().await?)
    }

    pub async fn timeline_stats(&self) -> Result<TimelineStats, TrackingError> {
        Ok(self.engine.timeline_stats().await?)
    }

    pub async fn update_timeline_progress(
        &self,
        step_id: StepId,
        completed: bool,
        notes: Option<String>,
    ) -> Result<TimelineStep, TrackingError> {
        let step = self
            .timeline
            .update_progress(step_id, completed, notes)
            .await?;
        info!(%step_id, completed, "timeline progress saved");
        Ok(step)
    }

    /// Create the standard checklist for a user with no items yet. Users that
    /// already have items get their existing checklist back untouched.
    pub async fn seed_checklist(&self, user_id: &str) -> Result<Vec<ProgressItem>, TrackingError> {
        if user_id.trim().is_empty() {
            return Err(TrackingError::InvalidArgument(
                "user_id must not be empty".to_string(),
            ));
        }

        let existing = self.items.list(user_id, ItemFilter::default()).await?;
        if !existing.is_empty() {
            return Ok(existing);
        }

        let mut created = Vec::with_capacity(self.checklist.items().len());
        for template in self.checklist.items() {
            created.push(self.items.insert(template.instantiate(user_id)).await?);
        }
        info!(user_id, items = created.len(), "standard checklist seeded");
        Ok(created)
    }
}

/// Turn a JSON patch body into a [`ProgressPatch`].
///
/// Recognised keys are `status`, `notes`, and `priority`; anything else is
/// ignored, so a body with no recognised keys is an empty patch.
pub fn parse_patch(body: &Value) -> Result<ProgressPatch, TrackingError> {
    let Value::Object(fields) = body else {
        return Err(invalid("patch body must be a JSON object"));
    };

    let mut patch = ProgressPatch::default();

    if let Some(value) = fields.get("status") {
        let raw = value
            .as_str()
            .ok_or_else(|| invalid("status must be a string"))?;
        let status = raw
            .parse::<ProgressStatus>()
            .map_err(|err| TrackingError::InvalidArgument(err.to_string()))?;
        patch.status = Some(status);
    }

    if let Some(value) = fields.get("notes") {
        patch.notes = Some(match value {
            Value::Null => None,
            Value::String(notes) => Some(notes.clone()),
            _ => return Err(invalid("notes must be a string or null")),
        });
    }

    if let Some(value) = fields.get("priority") {
        patch.priority = Some(match value {
            Value::Null => None,
            Value::String(label) => Some(Priority::Label(label.clone())),
            Value::Number(number) => {
                let rank = number
                    .as_u64()
                    .and_then(|rank| u32::try_from(rank).ok())
                    .ok_or_else(|| invalid("priority rank must be a non-negative integer"))?;
                Some(Priority::Rank(rank))
            }
            _ => return Err(invalid("priority must be a string, integer, or null")),
        });
    }

    Ok(patch)
}

fn invalid(message: &str) -> TrackingError {
    TrackingError::InvalidArgument(message.to_string())
}

/// Error surfaced to the HTTP layer. Each variant maps to one response status.
#[derive(Debug, thiserror::Error)]
pub enum TrackingError {
    #[error("{0}")]
    NotFound(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("sub-task index {index} out of range for {len} sub-tasks")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),
}

impl From<StoreError> for TrackingError {
    fn from(value: StoreError) -> Self {
        warn!(error = %value, "document store failure");
        Self::StoreUnavailable(value)
    }
}

impl From<ProgressError> for TrackingError {
    fn from(value: ProgressError) -> Self {
        match value {
            ProgressError::NotFound(_) => Self::NotFound(value.to_string()),
            ProgressError::IndexOutOfRange { index, len } => Self::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len,
            },
            ProgressError::Store(err) => err.into(),
        }
    }
}

impl From<TimelineError> for TrackingError {
    fn from(value: TimelineError) -> Self {
        match value {
            TimelineError::StepNotFound(_) => Self::NotFound(value.to_string()),
            TimelineError::Store(err) => err.into(),
        }
    }
}
