//! HTTP 핸들러.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use crate::domain::review::DEFAULT_LANGUAGE;

use super::AppState;
use super::dto::{Endpoints, HealthResponse, ReviewRequestBody, ReviewResponseBody, RootResponse};
use super::error::ApiError;

pub const SERVICE_NAME: &str = "PR Reviewer Agent";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

pub(super) async fn root(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("{SERVICE_NAME} API"),
        version: SERVICE_VERSION.to_string(),
        prompt_version: state.review.prompt_version().to_string(),
        endpoints: Endpoints {
            revisor: "/revisor".to_string(),
            health: "/health".to_string(),
        },
    })
}

pub(super) async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        prompt_version: state.review.prompt_version().to_string(),
        llm_model: state.review.model().to_string(),
    })
}

pub(super) async fn revisor(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ReviewRequestBody>, JsonRejection>,
) -> Result<Json<ReviewResponseBody>, ApiError> {
    let Json(body) = payload?;
    let diff_size = body.diff.chars().count();

    tracing::info!(
        pr_title = body.pr_title.as_deref().unwrap_or("N/A"),
        diff_size,
        "review request received"
    );

    let review = state.review.execute(body.to_input()).await?;

    Ok(Json(ReviewResponseBody {
        status: "success".to_string(),
        message: "Review completed successfully".to_string(),
        diff_received: true,
        diff_size,
        review: Some(review),
        pr_title: body.pr_title,
        language: Some(body.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())),
        prompt_version: Some(state.review.prompt_version().to_string()),
    }))
}
