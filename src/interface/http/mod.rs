//! JSON HTTP API (`/`, `/health`, `/revisor`).

mod dto;
mod error;
mod routes;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;

use crate::application::usecases::review_diff::ReviewDiffUseCase;

pub use dto::{
    Endpoints, ErrorBody, HealthResponse, ReviewRequestBody, ReviewResponseBody, RootResponse,
};
pub use error::ApiError;
pub use routes::{SERVICE_NAME, SERVICE_VERSION};

/// 핸들러 간 공유되는 읽기 전용 상태.
pub struct AppState {
    pub review: ReviewDiffUseCase,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/revisor", post(routes::revisor))
        .with_state(state)
}

/// 주소에 바인딩하고 종료 시그널까지 요청을 처리한다.
pub async fn serve(bind_addr: &str, state: Arc<AppState>) -> Result<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    let local = listener.local_addr().context("failed to read bound address")?;

    tracing::info!(
        addr = %local,
        prompt_version = state.review.prompt_version(),
        model = state.review.model(),
        "review API listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            // 시그널 핸들러를 못 걸면 프로세스 종료 시까지 계속 서비스한다.
            tracing::warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
