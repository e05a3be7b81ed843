use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::blueprint::{StepTemplate, TimelineBlueprint};
use super::domain::{StepId, TimelineStep};
use crate::store::{from_document, to_document, DocumentStore, Filter, StoreError, TIMELINE_STEPS};

/// Mutable per-step state persisted in `timeline_steps`; everything else comes
/// from the blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct StepState {
    step_id: StepId,
    is_completed: bool,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
}

fn merge(template: &StepTemplate, state: Option<&StepState>) -> TimelineStep {
    TimelineStep {
        id: template.id,
        title: template.title,
        category: template.category,
        description: template.description,
        week: template.week,
        is_completed: state.is_some_and(|state| state.is_completed),
        notes: state.and_then(|state| state.notes.clone()),
        completed_at: state.and_then(|state| state.completed_at),
    }
}

pub struct TimelineStore<S> {
    store: Arc<S>,
    blueprint: Arc<TimelineBlueprint>,
}

impl<S> Clone for TimelineStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            blueprint: Arc::clone(&self.blueprint),
        }
    }
}

impl<S> TimelineStore<S>
where
    S: DocumentStore + 'static,
{
    pub fn new(store: Arc<S>, blueprint: TimelineBlueprint) -> Self {
        Self {
            store,
            blueprint: Arc::new(blueprint),
        }
    }

    /// Every canonical step, in blueprint order, with its stored completion state.
    pub async fn list_all(&self) -> Result<Vec<TimelineStep>, TimelineError> {
        let states = self.load_states().await?;
        Ok(self
            .blueprint
            .steps()
            .iter()
            .map(|template| merge(template, states.get(&template.id)))
            .collect())
    }

    /// Steps grouped by category; each group keeps blueprint order.
    pub async fn list_by_category(
        &self,
    ) -> Result<BTreeMap<String, Vec<TimelineStep>>, TimelineError> {
        let mut grouped: BTreeMap<String, Vec<TimelineStep>> = BTreeMap::new();
        for step in self.list_all().await? {
            grouped
                .entry(step.category.to_string())
                .or_default()
                .push(step);
        }
        Ok(grouped)
    }

    /// Set the completion flag and, when given, the notes.
    ///
    /// `completed_at` is stamped on the first transition to completed and kept on
    /// repeats, so calling twice with the same value yields the same step.
    pub async fn update_progress(
        &self,
        step_id: StepId,
        completed: bool,
        notes: Option<String>,
    ) -> Result<TimelineStep, TimelineError> {
        let template = self
            .blueprint
            .step(step_id)
            .ok_or(TimelineError::StepNotFound(step_id))?;

        let current = self.load_state(step_id).await?;
        let was_completed = current.as_ref().is_some_and(|state| state.is_completed);

        let completed_at = match (completed, was_completed) {
            (true, true) => current
                .as_ref()
                .and_then(|state| state.completed_at)
                .or_else(|| Some(Utc::now())),
            (true, false) => Some(Utc::now()),
            (false, _) => None,
        };

        let next = StepState {
            step_id,
            is_completed: completed,
            notes: notes.or_else(|| current.as_ref().and_then(|state| state.notes.clone())),
            completed_at,
        };

        if current.as_ref() != Some(&next) {
            self.store
                .upsert(TIMELINE_STEPS, &step_id.document_key(), to_document(&next)?)
                .await?;
            debug!(%step_id, completed, "timeline step updated");
        }

        Ok(merge(template, Some(&next)))
    }

    async fn load_state(&self, step_id: StepId) -> Result<Option<StepState>, TimelineError> {
        let document = self
            .store
            .get(TIMELINE_STEPS, &step_id.document_key())
            .await?;
        Ok(document.map(from_document::<StepState>).transpose()?)
    }

    async fn load_states(&self) -> Result<BTreeMap<StepId, StepState>, TimelineError> {
        let documents = self.store.find(TIMELINE_STEPS, &Filter::new()).await?;
        let mut states = BTreeMap::new();
        for document in documents {
            let state: StepState = from_document(document)?;
            states.insert(state.step_id, state);
        }
        Ok(states)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("timeline step {0} not found")]
    StepNotFound(StepId),
    #[error(transparent)]
    Store(#[from] StoreError),
}
