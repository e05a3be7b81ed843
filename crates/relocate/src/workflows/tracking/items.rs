use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::debug;

use super::domain::{ItemFilter, ItemId, NewProgressItem, ProgressItem, ProgressPatch};
use crate::store::{
    from_document, to_document, Document, DocumentStore, Filter, StoreError, PROGRESS_ITEMS,
};

/// Typed access to the `progress_items` collection.
pub struct ProgressItemStore<S> {
    store: Arc<S>,
}

impl<S> Clone for ProgressItemStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> ProgressItemStore<S>
where
    S: DocumentStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn insert(&self, item: NewProgressItem) -> Result<ProgressItem, ProgressError> {
        let record = ProgressItem {
            id: ItemId::generate(),
            user_id: item.user_id,
            category: item.category,
            title: item.title,
            description: item.description,
            status: item.status,
            notes: None,
            priority: item.priority,
            subtasks: item.subtasks,
            updated_at: Utc::now(),
        };

        self.store
            .upsert(PROGRESS_ITEMS, record.id.as_str(), to_document(&record)?)
            .await?;
        debug!(item_id = %record.id, user_id = %record.user_id, "progress item created");
        Ok(record)
    }

    /// Items owned by `user_id` in insertion order, narrowed by exact-match filters.
    pub async fn list(
        &self,
        user_id: &str,
        filter: ItemFilter<'_>,
    ) -> Result<Vec<ProgressItem>, ProgressError> {
        let mut query = Filter::new().eq("user_id", user_id);
        if let Some(category) = filter.category {
            query = query.eq("category", category);
        }
        if let Some(status) = filter.status {
            query = query.eq("status", status.as_str());
        }

        let documents = self.store.find(PROGRESS_ITEMS, &query).await?;
        documents
            .into_iter()
            .map(|document| from_document(document).map_err(ProgressError::from))
            .collect()
    }

    pub async fn get(&self, id: &ItemId) -> Result<ProgressItem, ProgressError> {
        let document = self
            .store
            .get(PROGRESS_ITEMS, id.as_str())
            .await?
            .ok_or_else(|| ProgressError::NotFound(id.clone()))?;
        Ok(from_document(document)?)
    }

    /// Apply the fields present in `patch` with a single store write.
    ///
    /// An empty patch performs no write and returns the current record.
    pub async fn update(
        &self,
        id: &ItemId,
        patch: &ProgressPatch,
    ) -> Result<ProgressItem, ProgressError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut fields = Document::new();
        if let Some(status) = patch.status {
            fields.insert("status".to_string(), Value::from(status.as_str()));
        }
        if let Some(notes) = &patch.notes {
            fields.insert(
                "notes".to_string(),
                serde_json::to_value(notes).map_err(StoreError::from)?,
            );
        }
        if let Some(priority) = &patch.priority {
            fields.insert(
                "priority".to_string(),
                serde_json::to_value(priority).map_err(StoreError::from)?,
            );
        }

        let updated = self.write_fields(id, fields).await?;
        debug!(item_id = %id, status = ?patch.status, "progress item updated");
        Ok(updated)
    }

    /// Flip `subtasks[index].done`. Two calls in a row restore the original value.
    pub async fn toggle_subtask(
        &self,
        id: &ItemId,
        index: usize,
    ) -> Result<ProgressItem, ProgressError> {
        let mut item = self.get(id).await?;
        let len = item.subtasks.len();
        let subtask = item
            .subtasks
            .get_mut(index)
            .ok_or(ProgressError::IndexOutOfRange { index, len })?;
        subtask.done = !subtask.done;
        let done = subtask.done;

        let mut fields = Document::new();
        fields.insert(
            "subtasks".to_string(),
            serde_json::to_value(&item.subtasks).map_err(StoreError::from)?,
        );

        let updated = self.write_fields(id, fields).await?;
        debug!(item_id = %id, index, done, "sub-task toggled");
        Ok(updated)
    }

    async fn write_fields(
        &self,
        id: &ItemId,
        mut fields: Document,
    ) -> Result<ProgressItem, ProgressError> {
        fields.insert(
            "updated_at".to_string(),
            serde_json::to_value(Utc::now()).map_err(StoreError::from)?,
        );

        let document = self
            .store
            .set_fields(PROGRESS_ITEMS, id.as_str(), fields)
            .await?
            .ok_or_else(|| ProgressError::NotFound(id.clone()))?;
        Ok(from_document(document)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    #[error("progress item {0} not found")]
    NotFound(ItemId),
    #[error("sub-task index {index} out of range for {len} sub-tasks")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Store(#[from] StoreError),
}
