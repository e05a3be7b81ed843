use std::sync::Arc;

use super::common::*;
use crate::workflows::tracking::domain::{
    ItemFilter, ItemId, Priority, ProgressItem, ProgressPatch, ProgressStatus,
};
use crate::workflows::tracking::{ProgressError, ProgressItemStore};

#[tokio::test]
async fn list_scopes_to_user_and_preserves_insertion_order() {
    let (coordinator, _) = build_coordinator();
    let items = coordinator.items();

    let first = insert_item(items, "Housing", "Lease", ProgressStatus::NotStarted).await;
    let mut other_user = new_item("Housing", "Not mine", ProgressStatus::NotStarted);
    other_user.user_id = "someone-else".to_string();
    items.insert(other_user).await.expect("insert other user");
    let second = insert_item(items, "Documentation", "Visa", ProgressStatus::Completed).await;

    let listed = items
        .list(USER, ItemFilter::default())
        .await
        .expect("list succeeds");
    let ids: Vec<_> = listed.iter().map(|item| item.id.clone()).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn list_applies_exact_match_filters() {
    let (coordinator, _) = build_coordinator();
    let items = coordinator.items();
    documentation_checklist(items).await;
    insert_item(items, "Housing", "Lease", ProgressStatus::Completed).await;

    let completed_docs = items
        .list(
            USER,
            ItemFilter {
                category: Some("Documentation"),
                status: Some(ProgressStatus::Completed),
            },
        )
        .await
        .expect("list succeeds");
    assert_eq!(completed_docs.len(), 1);
    assert_eq!(completed_docs[0].title, "Birth certificate");

    let lowercase = items
        .list(
            USER,
            ItemFilter {
                category: Some("documentation"),
                status: None,
            },
        )
        .await
        .expect("list succeeds");
    assert!(lowercase.is_empty(), "category match is exact");
}

#[tokio::test]
async fn get_reports_missing_items() {
    let (coordinator, _) = build_coordinator();
    match coordinator.items().get(&ItemId("missing".to_string())).await {
        Err(ProgressError::NotFound(id)) => assert_eq!(id.0, "missing"),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn update_only_touches_provided_fields() {
    let (coordinator, _) = build_coordinator();
    let items = coordinator.items();
    let item = insert_item(items, "Housing", "Lease", ProgressStatus::NotStarted).await;

    let with_notes = items
        .update(
            &item.id,
            &ProgressPatch {
                notes: Some(Some("Call the agent".to_string())),
                ..ProgressPatch::default()
            },
        )
        .await
        .expect("notes update");
    assert_eq!(with_notes.notes.as_deref(), Some("Call the agent"));
    assert_eq!(with_notes.status, ProgressStatus::NotStarted);

    let completed = items
        .update(
            &item.id,
            &ProgressPatch {
                status: Some(ProgressStatus::Completed),
                ..ProgressPatch::default()
            },
        )
        .await
        .expect("status update");
    assert_eq!(completed.status, ProgressStatus::Completed);
    assert_eq!(completed.notes.as_deref(), Some("Call the agent"));
    assert_eq!(completed.priority, item.priority);
    assert_eq!(completed.subtasks, item.subtasks);

    let cleared = items
        .update(
            &item.id,
            &ProgressPatch {
                priority: Some(None),
                ..ProgressPatch::default()
            },
        )
        .await
        .expect("priority cleared");
    assert_eq!(cleared.priority, None);
    assert_eq!(cleared.status, ProgressStatus::Completed);
}

#[tokio::test]
async fn empty_patch_leaves_record_untouched() {
    let (coordinator, _) = build_coordinator();
    let items = coordinator.items();
    let item = insert_item(items, "Housing", "Lease", ProgressStatus::InProgress).await;

    let unchanged = items
        .update(&item.id, &ProgressPatch::default())
        .await
        .expect("empty patch succeeds");
    assert_eq!(unchanged, item);
}

#[tokio::test]
async fn update_missing_item_is_not_found() {
    let (coordinator, _) = build_coordinator();
    let patch = ProgressPatch {
        priority: Some(Some(Priority::Rank(1))),
        ..ProgressPatch::default()
    };
    let result = coordinator
        .items()
        .update(&ItemId("missing-id".to_string()), &patch)
        .await;
    assert!(matches!(result, Err(ProgressError::NotFound(_))));
}

#[tokio::test]
async fn toggle_twice_restores_original_value() {
    let (coordinator, _) = build_coordinator();
    let items = coordinator.items();
    let item = insert_item(items, "Housing", "Lease", ProgressStatus::InProgress).await;

    for index in 0..item.subtasks.len() {
        let once = items.toggle_subtask(&item.id, index).await.expect("toggle");
        assert_eq!(once.subtasks[index].done, !item.subtasks[index].done);
        let twice = items.toggle_subtask(&item.id, index).await.expect("toggle back");
        assert_eq!(twice.subtasks, item.subtasks);
    }
}

#[tokio::test]
async fn toggle_rejects_out_of_range_index() {
    let (coordinator, _) = build_coordinator();
    let items = coordinator.items();
    let item = insert_item(items, "Housing", "Lease", ProgressStatus::InProgress).await;

    match items.toggle_subtask(&item.id, 2).await {
        Err(ProgressError::IndexOutOfRange { index, len }) => {
            assert_eq!(index, 2);
            assert_eq!(len, 2);
        }
        other => panic!("expected index error, got {other:?}"),
    }
    let stored = items.get(&item.id).await.expect("still present");
    assert_eq!(stored, item);
}

async fn gated_items(
    field: &'static str,
) -> (ProgressItemStore<GatedStore>, Arc<GatedStore>, ProgressItem) {
    let store = Arc::new(GatedStore::new(field));
    let items = ProgressItemStore::new(Arc::clone(&store));
    let item = insert_item(&items, "Housing", "Lease", ProgressStatus::NotStarted).await;
    store.arm();
    (items, store, item)
}

#[tokio::test]
async fn status_write_landing_mid_toggle_is_kept() {
    let (items, store, item) = gated_items("subtasks").await;

    let toggle = tokio::spawn({
        let items = items.clone();
        let id = item.id.clone();
        async move { items.toggle_subtask(&id, 0).await }
    });
    store.write_held().await;

    let status_patch = ProgressPatch {
        status: Some(ProgressStatus::InProgress),
        ..ProgressPatch::default()
    };
    items
        .update(&item.id, &status_patch)
        .await
        .expect("status update");

    store.release();
    toggle.await.expect("toggle task").expect("toggle");

    let stored = items.get(&item.id).await.expect("present");
    assert_eq!(stored.status, ProgressStatus::InProgress);
    assert!(stored.subtasks[0].done);
}

#[tokio::test]
async fn toggle_landing_mid_status_write_is_kept() {
    let (items, store, item) = gated_items("status").await;

    let update = tokio::spawn({
        let items = items.clone();
        let id = item.id.clone();
        async move {
            let status_patch = ProgressPatch {
                status: Some(ProgressStatus::Completed),
                ..ProgressPatch::default()
            };
            items.update(&id, &status_patch).await
        }
    });
    store.write_held().await;

    items.toggle_subtask(&item.id, 0).await.expect("toggle");

    store.release();
    update.await.expect("update task").expect("status update");

    let stored = items.get(&item.id).await.expect("present");
    assert_eq!(stored.status, ProgressStatus::Completed);
    assert!(stored.subtasks[0].done);
}
