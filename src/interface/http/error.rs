//! 도메인 오류를 HTTP 상태 코드/본문으로 변환한다.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::error::ReviewError;

use super::dto::ErrorBody;

#[derive(Debug)]
pub enum ApiError {
    Review(ReviewError),
    /// 본문이 JSON 스키마와 맞지 않음(필수 `diff` 누락 등)
    InvalidBody(JsonRejection),
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        Self::Review(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(rejection) => rejection.status(),
            Self::Review(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Review(ReviewError::LlmInvocation { .. }) => StatusCode::BAD_GATEWAY,
            Self::Review(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::InvalidBody(rejection) => rejection.body_text(),
            Self::Review(err) if err.is_client_error() => err.to_string(),
            Self::Review(err) => format!("failed to process diff: {err}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        if let Self::Review(err) = &self
            && err.is_configuration_error()
        {
            tracing::error!(%status, %detail, "prompt template does not match the review inputs");
        } else if status.is_server_error() {
            tracing::error!(%status, %detail, "review request failed");
        } else {
            tracing::warn!(%status, %detail, "review request rejected");
        }

        (status, Json(ErrorBody { detail })).into_response()
    }
}
