use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::coordinator::{TrackingError, UpdateCoordinator};
use super::domain::{ItemId, StepId};
use crate::store::DocumentStore;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ItemQuery {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubtaskToggleRequest {
    subtask_index: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TimelineProgressRequest {
    step_id: u32,
    completed: bool,
    #[serde(default)]
    notes: Option<String>,
}

/// Router exposing checklist, dashboard, and timeline endpoints.
pub fn tracking_router<S>(coordinator: Arc<UpdateCoordinator<S>>) -> Router
where
    S: DocumentStore + 'static,
{
    Router::new()
        .route(
            "/api/progress/users/:user_id/items",
            get(list_items_handler::<S>),
        )
        .route(
            "/api/progress/users/:user_id/dashboard",
            get(dashboard_handler::<S>),
        )
        .route(
            "/api/progress/users/:user_id/seed",
            post(seed_handler::<S>),
        )
        .route("/api/progress/items/:item_id", put(update_item_handler::<S>))
        .route(
            "/api/progress/items/:item_id/subtask",
            post(toggle_subtask_handler::<S>),
        )
        .route("/api/timeline/full", get(timeline_handler::<S>))
        .route(
            "/api/timeline/by-category",
            get(timeline_by_category_handler::<S>),
        )
        .route(
            "/api/timeline/update-progress",
            post(update_timeline_handler::<S>),
        )
        .with_state(coordinator)
}

pub(crate) fn error_response(error: TrackingError) -> Response {
    let status = match &error {
        TrackingError::NotFound(_) => StatusCode::NOT_FOUND,
        TrackingError::InvalidArgument(_) => StatusCode::UNPROCESSABLE_ENTITY,
        TrackingError::IndexOutOfRange { .. } => StatusCode::BAD_REQUEST,
        TrackingError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

fn respond<T: serde::Serialize>(result: Result<T, TrackingError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_items_handler<S>(
    State(coordinator): State<Arc<UpdateCoordinator<S>>>,
    Path(user_id): Path<String>,
    Query(query): Query<ItemQuery>,
) -> Response
where
    S: DocumentStore + 'static,
{
    let result = coordinator
        .list_items(
            &user_id,
            query.category.as_deref(),
            query.status.as_deref(),
        )
        .await
        .map(|items| json!({ "total": items.len(), "items": items }));
    respond(result)
}

pub(crate) async fn dashboard_handler<S>(
    State(coordinator): State<Arc<UpdateCoordinator<S>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: DocumentStore + 'static,
{
    respond(coordinator.progress_dashboard(&user_id).await)
}

pub(crate) async fn seed_handler<S>(
    State(coordinator): State<Arc<UpdateCoordinator<S>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: DocumentStore + 'static,
{
    let result = coordinator
        .seed_checklist(&user_id)
        .await
        .map(|items| json!({ "total": items.len(), "items": items }));
    respond(result)
}

pub(crate) async fn update_item_handler<S>(
    State(coordinator): State<Arc<UpdateCoordinator<S>>>,
    Path(item_id): Path<String>,
    Json(body): Json<Value>,
) -> Response
where
    S: DocumentStore + 'static,
{
    respond(coordinator.update_item(&ItemId(item_id), &body).await)
}

pub(crate) async fn toggle_subtask_handler<S>(
    State(coordinator): State<Arc<UpdateCoordinator<S>>>,
    Path(item_id): Path<String>,
    Json(request): Json<SubtaskToggleRequest>,
) -> Response
where
    S: DocumentStore + 'static,
{
    respond(
        coordinator
            .toggle_subtask(&ItemId(item_id), request.subtask_index)
            .await,
    )
}

pub(crate) async fn timeline_handler<S>(
    State(coordinator): State<Arc<UpdateCoordinator<S>>>,
) -> Response
where
    S: DocumentStore + 'static,
{
    let timeline = match coordinator.list_timeline().await {
        Ok(timeline) => timeline,
        Err(error) => return error_response(error),
    };
    let stats = super::report::summarize_timeline(&timeline);
    respond(Ok(json!({ "timeline": timeline, "stats": stats })))
}

pub(crate) async fn timeline_by_category_handler<S>(
    State(coordinator): State<Arc<UpdateCoordinator<S>>>,
) -> Response
where
    S: DocumentStore + 'static,
{
    let result = coordinator
        .timeline_by_category()
        .await
        .map(|categories| json!({ "categories": categories }));
    respond(result)
}

pub(crate) async fn update_timeline_handler<S>(
    State(coordinator): State<Arc<UpdateCoordinator<S>>>,
    Json(request): Json<TimelineProgressRequest>,
) -> Response
where
    S: DocumentStore + 'static,
{
    let TimelineProgressRequest {
        step_id,
        completed,
        notes,
    } = request;
    respond(
        coordinator
            .update_timeline_progress(StepId(step_id), completed, notes)
            .await,
    )
}
