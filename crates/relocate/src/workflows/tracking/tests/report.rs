use super::common::*;
use crate::workflows::tracking::domain::{ProgressStatus, StepId};
use crate::workflows::tracking::report::{completion_percentage, summarize_items};

#[test]
fn completion_percentage_rounds_to_one_decimal() {
    assert_eq!(completion_percentage(0, 0), 0.0);
    assert_eq!(completion_percentage(1, 3), 33.3);
    assert_eq!(completion_percentage(2, 3), 66.7);
    assert_eq!(completion_percentage(4, 4), 100.0);
}

#[test]
fn empty_checklist_reports_zero() {
    let dashboard = summarize_items(&[]);
    assert_eq!(dashboard.overview.total_items, 0);
    assert_eq!(dashboard.overview.completion_percentage, 0.0);
    assert!(dashboard.by_category.is_empty());
}

#[tokio::test]
async fn dashboard_reports_documentation_scenario() {
    let (coordinator, _) = build_coordinator();
    documentation_checklist(coordinator.items()).await;

    let dashboard = coordinator
        .progress_dashboard(USER)
        .await
        .expect("dashboard builds");

    let overview = &dashboard.overview;
    assert_eq!(overview.total_items, 3);
    assert_eq!(overview.completed_items, 1);
    assert_eq!(overview.in_progress_items, 1);
    assert_eq!(overview.not_started_items, 1);
    assert_eq!(overview.completion_percentage, 33.3);
    assert_eq!(dashboard.by_category["Documentation"], *overview);
}

#[tokio::test]
async fn dashboard_counts_partition_the_total() {
    let (coordinator, _) = build_coordinator();
    let items = coordinator.items();
    documentation_checklist(items).await;
    insert_item(items, "Housing", "Lease", ProgressStatus::Completed).await;
    insert_item(items, "Housing", "Deposit", ProgressStatus::Completed).await;

    let dashboard = coordinator.progress_dashboard(USER).await.expect("dashboard");
    for stats in std::iter::once(&dashboard.overview).chain(dashboard.by_category.values()) {
        assert_eq!(
            stats.not_started_items + stats.in_progress_items + stats.completed_items,
            stats.total_items
        );
    }
    assert_eq!(dashboard.by_category["Housing"].completion_percentage, 100.0);
    assert_eq!(dashboard.overview.completion_percentage, 60.0);
}

#[tokio::test]
async fn dashboard_reflects_latest_update() {
    let (coordinator, _) = build_coordinator();
    let created = documentation_checklist(coordinator.items()).await;

    coordinator
        .update_item(&created[0].id, &serde_json::json!({ "status": "completed" }))
        .await
        .expect("update");

    let dashboard = coordinator.progress_dashboard(USER).await.expect("dashboard");
    assert_eq!(dashboard.overview.completed_items, 2);
    assert_eq!(dashboard.overview.completion_percentage, 66.7);
}

#[tokio::test]
async fn timeline_stats_track_completed_steps() {
    let (coordinator, _) = build_coordinator();
    let initial = coordinator.timeline_stats().await.expect("stats");
    assert_eq!(initial.completed_steps, 0);
    assert_eq!(initial.completion_percentage, 0.0);

    coordinator
        .update_timeline_progress(StepId(1), true, None)
        .await
        .expect("complete step");
    coordinator
        .update_timeline_progress(StepId(3), true, None)
        .await
        .expect("complete step");

    let stats = coordinator.timeline_stats().await.expect("stats");
    assert_eq!(stats.total_steps, initial.total_steps);
    assert_eq!(stats.completed_steps, 2);
    assert_eq!(stats.by_category["Planning"].completed_steps, 1);
    assert_eq!(stats.by_category["Documentation"].completed_steps, 1);
}
