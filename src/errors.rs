use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("API key missing")]
    MissingApiKey,

    #[error("invalid request body")]
    MalformedBody,

    #[error("token expired")]
    TokenExpired,

    #[error("token invalid")]
    TokenInvalid,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingApiKey => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "API key missing" }),
            ),
            AppError::MalformedBody => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "invalid request body" }),
            ),
            AppError::TokenExpired => (StatusCode::UNAUTHORIZED, json!({ "status": "expired" })),
            AppError::TokenInvalid => (StatusCode::UNAUTHORIZED, json!({ "status": "invalid" })),
            AppError::Internal(detail) => {
                tracing::error!(%detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
