use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Extension;
use axum::Json;
use campus_connect::profiles::{profile_router, ProfileRepository, RecommendationService};
use campus_connect::recommendations::reference::{major_colors, OFFERED_MAJORS};
use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_service_routes<R>(service: Arc<RecommendationService<R>>) -> axum::Router
where
    R: ProfileRepository + 'static,
{
    profile_router(service)
        .route("/", get(root_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/majors", get(majors_endpoint))
        .route("/categories", get(categories_endpoint))
        .route("/major-colors", get(major_colors_endpoint))
}

pub(crate) async fn root_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Campus Connect API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
    timestamp: DateTime<Local>,
}

pub(crate) async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Local::now(),
    })
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn majors_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "majors": OFFERED_MAJORS }))
}

pub(crate) async fn categories_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<serde_json::Value> {
    let categories = state.catalogs.snapshot().interest_options();
    Json(json!({ "categories": categories }))
}

pub(crate) async fn major_colors_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "major_colors": major_colors() }))
}
