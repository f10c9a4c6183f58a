//! Telemetry service error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use vanguard_core::error::{classify, log_failure};
use vanguard_core::ErrorKind;

/// Service identifier carried in the sentinel's responses
pub const SENTINEL_SERVICE_NAME: &str = "elysium-telemetry-sentinel";

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    EndpointNotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl TelemetryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TelemetryError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            TelemetryError::EndpointNotFound(_) => ErrorKind::EndpointNotFound,
            TelemetryError::Internal(_) => ErrorKind::InternalFault,
        }
    }
}

impl IntoResponse for TelemetryError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let detail = self.to_string();
        log_failure(kind, &detail);

        let body = classify(kind, &detail, SENTINEL_SERVICE_NAME);
        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(body)).into_response()
    }
}

pub type TelemetryResult<T> = Result<T, TelemetryError>;
