use metrics_exporter_prometheus::PrometheusHandle;
use relocate::catalog::ReferenceCatalog;
use relocate::store::InMemoryDocumentStore;
use relocate::workflows::records::RelocationRecords;
use relocate::workflows::tracking::{TrackingError, UpdateCoordinator};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Every domain service wired over one shared document store.
#[derive(Clone)]
pub(crate) struct Services {
    pub(crate) coordinator: Arc<UpdateCoordinator<InMemoryDocumentStore>>,
    pub(crate) records: Arc<RelocationRecords<InMemoryDocumentStore>>,
    pub(crate) catalog: Arc<ReferenceCatalog>,
}

impl Services {
    pub(crate) fn in_memory() -> Self {
        let store = Arc::new(InMemoryDocumentStore::new());
        Self {
            coordinator: Arc::new(UpdateCoordinator::new(Arc::clone(&store))),
            records: Arc::new(RelocationRecords::new(store)),
            catalog: Arc::new(ReferenceCatalog::standard()),
        }
    }

    /// Create the standard checklist for `user_id` unless they already have one.
    pub(crate) async fn seed_user(&self, user_id: &str) -> Result<usize, TrackingError> {
        let items = self.coordinator.seed_checklist(user_id).await?;
        info!(user_id, items = items.len(), "checklist available");
        Ok(items.len())
    }
}
