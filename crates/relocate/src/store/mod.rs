//! Document-store seam shared by every persisted record.
//!
//! Records are schemaless JSON objects grouped into named collections and keyed
//! by opaque string ids. The core never talks to a concrete database; services
//! receive an `Arc<S: DocumentStore>` at construction time so tests can run
//! against [`InMemoryDocumentStore`].

mod memory;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

pub use memory::InMemoryDocumentStore;

pub const PROGRESS_ITEMS: &str = "progress_items";
pub const TIMELINE_STEPS: &str = "timeline_steps";
pub const LOCATION_SEARCHES: &str = "location_searches";
pub const MOVING_SERVICES: &str = "moving_services";
pub const USER_PROFILES: &str = "user_profiles";

/// A stored record: a JSON object with top-level fields.
pub type Document = Map<String, Value>;

/// Exact-match filter on top-level document fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.clauses
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }
}

/// Narrow persistence contract: get, find, whole-record upsert, and a partial
/// field write that only touches the listed top-level fields.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Matching documents in insertion order.
    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError>;

    async fn upsert(&self, collection: &str, id: &str, document: Document)
        -> Result<(), StoreError>;

    /// Overwrite `fields` on an existing document and return the stored result.
    ///
    /// Returns `Ok(None)` when no document has `id`. Fields not named in
    /// `fields` keep whatever value the store currently holds, so two writers
    /// touching different fields never clobber each other.
    async fn set_fields(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<Option<Document>, StoreError>;
}

/// Error enumeration for store failures. Never retried by the core.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document store unavailable: {0}")]
    Unavailable(String),
    #[error("stored document is malformed: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub(crate) fn to_document<T: Serialize>(record: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Corrupt(serde::ser::Error::custom(format!(
            "expected a JSON object, got {other}"
        )))),
    }
}

pub(crate) fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(document))?)
}
