//! API handlers

pub mod risk;

use std::any::Any;

use axum::{
    extract::State,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    Json,
};
use vanguard_core::health::{HealthSnapshot, SubsystemHealth};

use crate::error::ApiError;
use crate::state::AppState;

/// Service health endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthSnapshot> {
    Json(state.health.health())
}

/// Risk subsystem health endpoint
pub async fn risk_health(State(state): State<AppState>) -> Json<SubsystemHealth> {
    Json(state.health.risk_subsystem_health())
}

/// Answer requests no route matched
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::EndpointNotFound(format!("No handler for {} {}", method, uri.path()))
}

/// Convert a handler panic into a classified error body
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        String::new()
    };

    ApiError::Unhandled(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_not_found_detail() {
        let error = not_found(Method::GET, Uri::from_static("/api/nope?x=1")).await;
        assert_eq!(error.to_string(), "No handler for GET /api/nope");
    }

    #[test]
    fn test_panic_payload_becomes_unhandled_exception() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
