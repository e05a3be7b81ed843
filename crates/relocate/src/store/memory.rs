use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{Document, DocumentStore, Filter, StoreError};

#[derive(Debug, Default)]
struct Collection {
    order: Vec<String>,
    documents: HashMap<String, Document>,
}

/// Process-local store used by the API binary and the test suites.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDocumentStore {
    collections: Arc<Mutex<HashMap<String, Collection>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .expect("store mutex poisoned")
            .get(collection)
            .map_or(0, |entries| entries.order.len())
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError> {
        let guard = self.collections.lock().expect("store mutex poisoned");
        Ok(guard
            .get(collection)
            .and_then(|entries| entries.documents.get(id))
            .cloned())
    }

    async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        let guard = self.collections.lock().expect("store mutex poisoned");
        let Some(entries) = guard.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(entries
            .order
            .iter()
            .filter_map(|id| entries.documents.get(id))
            .filter(|document| filter.matches(document))
            .cloned()
            .collect())
    }

    async fn upsert(
        &self,
        collection: &str,
        id: &str,
        document: Document,
    ) -> Result<(), StoreError> {
        let mut guard = self.collections.lock().expect("store mutex poisoned");
        let entries = guard.entry(collection.to_string()).or_default();
        if entries.documents.insert(id.to_string(), document).is_none() {
            entries.order.push(id.to_string());
        }
        Ok(())
    }

    async fn set_fields(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<Option<Document>, StoreError> {
        let mut guard = self.collections.lock().expect("store mutex poisoned");
        let Some(document) = guard
            .get_mut(collection)
            .and_then(|entries| entries.documents.get_mut(id))
        else {
            return Ok(None);
        };

        for (field, value) in fields {
            document.insert(field, value);
        }
        Ok(Some(document.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("test documents must be objects"),
        }
    }

    #[tokio::test]
    async fn find_preserves_insertion_order_across_overwrites() {
        let store = InMemoryDocumentStore::new();
        store
            .upsert("c", "b", doc(json!({ "n": 1 })))
            .await
            .expect("insert b");
        store
            .upsert("c", "a", doc(json!({ "n": 2 })))
            .await
            .expect("insert a");
        store
            .upsert("c", "b", doc(json!({ "n": 3 })))
            .await
            .expect("overwrite b");

        let found = store.find("c", &Filter::new()).await.expect("find");
        let values: Vec<_> = found.iter().map(|d| d["n"].clone()).collect();
        assert_eq!(values, vec![json!(3), json!(2)]);
        assert_eq!(store.len("c"), 2);
    }

    #[tokio::test]
    async fn set_fields_only_touches_named_fields() {
        let store = InMemoryDocumentStore::new();
        store
            .upsert("c", "x", doc(json!({ "status": "not_started", "notes": "keep" })))
            .await
            .expect("insert");

        let updated = store
            .set_fields("c", "x", doc(json!({ "status": "completed" })))
            .await
            .expect("set")
            .expect("document exists");

        assert_eq!(updated["status"], json!("completed"));
        assert_eq!(updated["notes"], json!("keep"));
    }

    #[tokio::test]
    async fn set_fields_reports_missing_documents() {
        let store = InMemoryDocumentStore::new();
        let outcome = store
            .set_fields("c", "missing", doc(json!({ "status": "completed" })))
            .await
            .expect("set");
        assert!(outcome.is_none());
        assert!(store.is_empty("c"));
    }
}
