use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;
use tokio::sync::Notify;

use crate::store::{Document, DocumentStore, Filter, InMemoryDocumentStore, StoreError};
use crate::workflows::tracking::domain::{
    NewProgressItem, Priority, ProgressItem, ProgressStatus, Subtask,
};
use crate::workflows::tracking::{ProgressItemStore, UpdateCoordinator};

pub(super) const USER: &str = "user-42";

pub(super) fn build_coordinator() -> (
    UpdateCoordinator<InMemoryDocumentStore>,
    Arc<InMemoryDocumentStore>,
) {
    let store = Arc::new(InMemoryDocumentStore::new());
    let coordinator = UpdateCoordinator::new(Arc::clone(&store));
    (coordinator, store)
}

pub(super) fn new_item(category: &str, title: &str, status: ProgressStatus) -> NewProgressItem {
    NewProgressItem {
        user_id: USER.to_string(),
        category: category.to_string(),
        title: title.to_string(),
        description: None,
        status,
        priority: Some(Priority::Label("medium".to_string())),
        subtasks: vec![
            Subtask::open("Collect documents"),
            Subtask {
                label: "Book appointment".to_string(),
                done: true,
            },
        ],
    }
}

pub(super) async fn insert_item<S: DocumentStore + 'static>(
    items: &ProgressItemStore<S>,
    category: &str,
    title: &str,
    status: ProgressStatus,
) -> ProgressItem {
    items
        .insert(new_item(category, title, status))
        .await
        .expect("item inserts")
}

/// Three "Documentation" items, one per status.
pub(super) async fn documentation_checklist<S: DocumentStore + 'static>(
    items: &ProgressItemStore<S>,
) -> Vec<ProgressItem> {
    let mut created = Vec::new();
    for (title, status) in [
        ("Passport", ProgressStatus::NotStarted),
        ("Visa forms", ProgressStatus::InProgress),
        ("Birth certificate", ProgressStatus::Completed),
    ] {
        created.push(insert_item(items, "Documentation", title, status).await);
    }
    created
}

pub(super) struct UnavailableStore;

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn get(&self, _collection: &str, _id: &str) -> Result<Option<Document>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: &Filter,
    ) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    async fn upsert(
        &self,
        _collection: &str,
        _id: &str,
        _document: Document,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    async fn set_fields(
        &self,
        _collection: &str,
        _id: &str,
        _fields: Document,
    ) -> Result<Option<Document>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

/// In-memory store that can hold one write mid-flight: once armed, the first
/// `upsert` or `set_fields` touching `field` parks until [`GatedStore::release`].
/// Also counts `get` calls.
pub(super) struct GatedStore {
    inner: InMemoryDocumentStore,
    field: &'static str,
    armed: AtomicBool,
    reads: AtomicUsize,
    held: Notify,
    released: Notify,
}

impl GatedStore {
    pub(super) fn new(field: &'static str) -> Self {
        Self {
            inner: InMemoryDocumentStore::new(),
            field,
            armed: AtomicBool::new(false),
            reads: AtomicUsize::new(0),
            held: Notify::new(),
            released: Notify::new(),
        }
    }

    pub(super) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub(super) fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    /// Resolves once a gated write is parked.
    pub(super) async fn write_held(&self) {
        self.held.notified().await;
    }

    pub(super) fn release(&self) {
        self.released.notify_one();
    }

    async fn gate(&self, fields: &Document) {
        if fields.contains_key(self.field) && self.armed.swap(false, Ordering::SeqCst) {
            self.held.notify_one();
            self.released.notified().await;
        }
    }
}

#[async_trait]
impl DocumentStore for GatedStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.get(collection, id).await
    }

    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        self.inner.find(collection, filter).await
    }

    async fn upsert(
        &self,
        collection: &str,
        id: &str,
        document: Document,
    ) -> Result<(), StoreError> {
        self.gate(&document).await;
        self.inner.upsert(collection, id, document).await
    }

    async fn set_fields(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<Option<Document>, StoreError> {
        self.gate(&fields).await;
        self.inner.set_fields(collection, id, fields).await
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
