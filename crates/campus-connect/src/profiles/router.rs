use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::repository::{ProfileRepository, RepositoryError};
use super::service::{RecommendationService, ServiceError};
use crate::recommendations::{Category, RawProfile, RecommendationError};

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub user_email: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    Category::default().label().to_string()
}

/// Router builder exposing profile and recommendation endpoints.
pub fn profile_router<R>(service: Arc<RecommendationService<R>>) -> Router
where
    R: ProfileRepository + 'static,
{
    Router::new()
        .route("/signup", post(signup_handler::<R>))
        .route("/signin", post(signin_handler::<R>))
        .route(
            "/profile/:email",
            get(profile_handler::<R>).put(update_profile_handler::<R>),
        )
        .route("/recommendations", post(recommendations_handler::<R>))
        .route("/catalog/reload", post(reload_handler::<R>))
        .with_state(service)
}

pub(crate) async fn signup_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
    Json(profile): Json<RawProfile>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.signup(profile) {
        Ok(email) => {
            let payload = json!({
                "message": "User created successfully",
                "email": email,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn signin_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
    Json(request): Json<SignInRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.signin(&request.email) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
    Path(email): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.profile(&email) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_profile_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
    Path(email): Path<String>,
    Json(profile): Json<RawProfile>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.update_profile(&email, profile) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommendations_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
    Json(request): Json<RecommendationRequest>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.recommend(&request.user_email, &request.category) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reload_handler<R>(
    State(service): State<Arc<RecommendationService<R>>>,
) -> Response
where
    R: ProfileRepository + 'static,
{
    match service.reload_catalogs() {
        Ok(counts) => (StatusCode::OK, Json(json!({ "catalogs": counts }))).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ServiceError) -> Response {
    let status = match &error {
        ServiceError::MissingEmail
        | ServiceError::Recommendation(RecommendationError::UnknownCategory(_)) => {
            StatusCode::BAD_REQUEST
        }
        ServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ServiceError::Recommendation(RecommendationError::DataUnavailable(_))
        | ServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ServiceError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
