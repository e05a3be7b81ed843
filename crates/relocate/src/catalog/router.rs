use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::ReferenceCatalog;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct JobQuery {
    /// Comma-separated skill names.
    #[serde(default)]
    skills: Option<String>,
}

pub fn catalog_router(catalog: Arc<ReferenceCatalog>) -> Router {
    Router::new()
        .route("/api/system/status", get(status_handler))
        .route("/api/location-analysis/:city", get(location_handler))
        .route("/api/jobs/recommendations", get(jobs_handler))
        .route("/api/visa/requirements", get(visas_handler))
        .route("/api/visa/requirements/:visa_type", get(visa_handler))
        .route("/api/logistics/providers", get(logistics_handler))
        .with_state(catalog)
}

fn not_found(what: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("{what} not found") })),
    )
        .into_response()
}

async fn status_handler(State(catalog): State<Arc<ReferenceCatalog>>) -> Response {
    Json(catalog.system_status()).into_response()
}

async fn location_handler(
    State(catalog): State<Arc<ReferenceCatalog>>,
    Path(city): Path<String>,
) -> Response {
    match catalog.location_analysis(&city) {
        Some(analysis) => Json(analysis).into_response(),
        None => not_found(format!("location analysis for {city}")),
    }
}

async fn jobs_handler(
    State(catalog): State<Arc<ReferenceCatalog>>,
    Query(query): Query<JobQuery>,
) -> Response {
    let skills: Vec<String> = query
        .skills
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect();
    let jobs = catalog.job_recommendations(&skills);
    Json(json!({ "total": jobs.len(), "recommendations": jobs })).into_response()
}

async fn visas_handler(State(catalog): State<Arc<ReferenceCatalog>>) -> Response {
    Json(json!({ "visa_types": catalog.visa_requirements() })).into_response()
}

async fn visa_handler(
    State(catalog): State<Arc<ReferenceCatalog>>,
    Path(visa_type): Path<String>,
) -> Response {
    match catalog.visa_requirement(&visa_type) {
        Some(visa) => Json(visa).into_response(),
        None => not_found(format!("visa type {visa_type}")),
    }
}

async fn logistics_handler(State(catalog): State<Arc<ReferenceCatalog>>) -> Response {
    Json(json!({ "providers": catalog.logistics_providers() })).into_response()
}
