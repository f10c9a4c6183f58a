//! Risk profile handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use vanguard_core::domain::RiskProfile;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Header carrying the caller's idempotency token
pub const IDEMPOTENCY_KEY_HEADER: &str = "x-idempotency-key";

/// Get the canonical risk profile
pub async fn get_profile(State(state): State<AppState>) -> Json<RiskProfile> {
    Json(state.profiles.current_profile())
}

/// Submit a proposed profile update
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<RiskProfile>, JsonRejection>,
) -> ApiResult<Json<RiskProfile>> {
    let idempotency_key = idempotency_key(&headers)?;
    let Json(proposed) = payload.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;

    let accepted = state.update_gate.update(idempotency_key, proposed).await?;

    Ok(Json(accepted))
}

fn idempotency_key(headers: &HeaderMap) -> ApiResult<&str> {
    let value = headers.get(IDEMPOTENCY_KEY_HEADER).ok_or_else(|| {
        ApiError::InvalidRequest("Missing required header X-Idempotency-Key".to_string())
    })?;

    value.to_str().map_err(|_| {
        ApiError::InvalidRequest("Header X-Idempotency-Key must be visible ASCII".to_string())
    })
}
