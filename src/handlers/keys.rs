use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::{
    auth::Verification,
    dto::keys::{GenerateKeyResponse, ValidKeyResponse, ValidateKeyRequest},
    errors::AppError,
    state::AppState,
};

pub async fn generate_key(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GenerateKeyResponse>, AppError> {
    let issued = state.issuer.issue()?;

    Ok(Json(GenerateKeyResponse {
        api_key: issued.token,
        expires_at: issued.expires_at,
    }))
}

pub async fn validate_key(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ValidateKeyRequest>, JsonRejection>,
) -> Result<Json<ValidKeyResponse>, AppError> {
    let Json(req) = payload.map_err(|e| {
        tracing::debug!(error = %e, "rejected validate-key body");
        AppError::MalformedBody
    })?;

    let token = match req.api_key.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => return Err(AppError::MissingApiKey),
    };

    match state.verifier.verify(token) {
        Verification::Valid { expires_at } => Ok(Json(ValidKeyResponse {
            status: "valid",
            expires_at: expires_at.timestamp(),
        })),
        Verification::Expired => Err(AppError::TokenExpired),
        Verification::Invalid => Err(AppError::TokenInvalid),
    }
}
