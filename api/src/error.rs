//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use vanguard_core::error::{classify, log_failure};
use vanguard_core::{CoreError, ErrorKind, SERVICE_NAME};

/// API error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    EndpointNotFound(String),

    #[error("{0}")]
    Unhandled(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            ApiError::EndpointNotFound(_) => ErrorKind::EndpointNotFound,
            ApiError::Unhandled(_) => ErrorKind::UnhandledException,
            ApiError::Core(err) => err.kind(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let detail = self.to_string();
        log_failure(kind, &detail);

        let body = classify(kind, &detail, SERVICE_NAME);
        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
