use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{LocationSearchSubmission, MovingServiceSubmission, ProfileSubmission};
use super::service::{RecordsError, RelocationRecords};
use crate::store::DocumentStore;

pub fn records_router<S>(records: Arc<RelocationRecords<S>>) -> Router
where
    S: DocumentStore + 'static,
{
    Router::new()
        .route("/api/search-locations", post(create_search_handler::<S>))
        .route(
            "/api/search-locations/:user_id",
            get(list_searches_handler::<S>),
        )
        .route("/api/moving-services", post(create_moving_handler::<S>))
        .route(
            "/api/moving-services/:user_id",
            get(list_moving_handler::<S>),
        )
        .route("/api/profile", post(create_profile_handler::<S>))
        .route(
            "/api/profile/:user_id",
            get(profile_handler::<S>).put(update_profile_handler::<S>),
        )
        .with_state(records)
}

fn respond<T: Serialize>(result: Result<T, RecordsError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(error) => {
            let status = match &error {
                RecordsError::NotFound(_) => StatusCode::NOT_FOUND,
                RecordsError::Conflict(_) => StatusCode::CONFLICT,
                RecordsError::InvalidArgument(_) => StatusCode::UNPROCESSABLE_ENTITY,
                RecordsError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            };
            (status, Json(json!({ "error": error.to_string() }))).into_response()
        }
    }
}

pub(crate) async fn create_search_handler<S>(
    State(records): State<Arc<RelocationRecords<S>>>,
    Json(submission): Json<LocationSearchSubmission>,
) -> Response
where
    S: DocumentStore + 'static,
{
    respond(records.create_search(submission).await)
}

pub(crate) async fn list_searches_handler<S>(
    State(records): State<Arc<RelocationRecords<S>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: DocumentStore + 'static,
{
    respond(records.searches_for(&user_id).await)
}

pub(crate) async fn create_moving_handler<S>(
    State(records): State<Arc<RelocationRecords<S>>>,
    Json(submission): Json<MovingServiceSubmission>,
) -> Response
where
    S: DocumentStore + 'static,
{
    respond(records.create_moving_service(submission).await)
}

pub(crate) async fn list_moving_handler<S>(
    State(records): State<Arc<RelocationRecords<S>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: DocumentStore + 'static,
{
    respond(records.moving_services_for(&user_id).await)
}

pub(crate) async fn create_profile_handler<S>(
    State(records): State<Arc<RelocationRecords<S>>>,
    Json(submission): Json<ProfileSubmission>,
) -> Response
where
    S: DocumentStore + 'static,
{
    respond(records.create_profile(submission).await)
}

pub(crate) async fn profile_handler<S>(
    State(records): State<Arc<RelocationRecords<S>>>,
    Path(user_id): Path<String>,
) -> Response
where
    S: DocumentStore + 'static,
{
    respond(records.profile(&user_id).await)
}

pub(crate) async fn update_profile_handler<S>(
    State(records): State<Arc<RelocationRecords<S>>>,
    Path(user_id): Path<String>,
    Json(submission): Json<ProfileSubmission>,
) -> Response
where
    S: DocumentStore + 'static,
{
    respond(records.update_profile(&user_id, submission).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryDocumentStore;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        records_router(Arc::new(RelocationRecords::new(Arc::new(
            InMemoryDocumentStore::new(),
        ))))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn profile_routes_create_then_fetch() {
        let router = router();
        let created = router
            .clone()
            .oneshot(post_json(
                "/api/profile",
                json!({
                    "user_id": "u-7",
                    "name": "Robin",
                    "email": "robin@example.com",
                    "current_location": "Denver",
                    "skills": ["Figma"],
                    "experience_level": "mid",
                    "remote_work_preference": "hybrid"
                }),
            ))
            .await
            .expect("route executes");
        assert_eq!(created.status(), StatusCode::OK);

        let fetched = router
            .clone()
            .oneshot(Request::get("/api/profile/u-7").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(fetched.status(), StatusCode::OK);

        let missing = router
            .oneshot(Request::get("/api/profile/nobody").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn search_route_rejects_empty_user() {
        let response = router()
            .oneshot(post_json(
                "/api/search-locations",
                json!({
                    "user_id": "",
                    "current_location": "Chicago",
                    "target_cities": ["Austin"],
                    "budget_range": { "min": 1000, "max": 2000 }
                }),
            ))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn moving_route_rejects_unknown_service_type() {
        let response = router()
            .oneshot(post_json(
                "/api/moving-services",
                json!({
                    "user_id": "u-7",
                    "service_type": "teleport",
                    "from_location": "Chicago",
                    "to_location": "Austin",
                    "moving_date": "2026-03-01T09:00:00Z",
                    "estimated_cost": 1500.0,
                    "items_count": 40
                }),
            ))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
