//! Core error types and the error classification table

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn, Level};

/// Detail used when a failure carries no message of its own
pub const DEFAULT_ERROR_DETAIL: &str = "No additional details available";

/// Core error type for all operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("STALE_UPDATE_DETECTED: Target version {proposed} is behind current version {current}")]
    StaleUpdate { proposed: u64, current: u64 },

    #[error("Idempotency store error: {0}")]
    IdempotencyStore(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Category this error is reported under
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::InvalidRequest(_) => ErrorKind::InvalidRequest,
            // Stale writes are reported as an internal fault rather than a conflict
            CoreError::StaleUpdate { .. } => ErrorKind::InternalFault,
            CoreError::IdempotencyStore(_) => ErrorKind::InternalFault,
            CoreError::Internal(_) => ErrorKind::InternalFault,
        }
    }
}

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;

/// The fixed failure taxonomy every outward error is reported under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Caller input failed a precondition
    InvalidRequest,
    /// No route matched the request
    EndpointNotFound,
    /// A recognized server-side rule violation
    InternalFault,
    /// Anything not otherwise classified
    UnhandledException,
}

impl ErrorKind {
    /// HTTP status code for this kind
    pub fn status(&self) -> u16 {
        match self {
            ErrorKind::InvalidRequest => 400,
            ErrorKind::EndpointNotFound => 404,
            ErrorKind::InternalFault => 500,
            ErrorKind::UnhandledException => 500,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidRequest => "INVALID_REQUEST",
            ErrorKind::EndpointNotFound => "ENDPOINT_NOT_FOUND",
            ErrorKind::InternalFault => "INTERNAL_FAULT",
            ErrorKind::UnhandledException => "UNHANDLED_EXCEPTION",
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.status() >= 500
    }

    /// Level a failure of this kind is logged at: server faults at `ERROR`,
    /// caller mistakes at `WARN`
    pub fn log_level(&self) -> Level {
        if self.is_server_error() {
            Level::ERROR
        } else {
            Level::WARN
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Structured error body returned for every failed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    /// Symbolic error code
    pub error: ErrorKind,
    /// Never empty
    pub detail: String,
    pub service: String,
}

impl ErrorResponse {
    /// Build an error body at an explicit instant
    pub fn new(kind: ErrorKind, detail: &str, service: &str, timestamp: DateTime<Utc>) -> Self {
        let detail = if detail.trim().is_empty() {
            DEFAULT_ERROR_DETAIL.to_string()
        } else {
            detail.to_string()
        };

        Self {
            timestamp,
            status: kind.status(),
            error: kind,
            detail,
            service: service.to_string(),
        }
    }
}

/// Log a failure at the level its kind calls for
pub fn log_failure(kind: ErrorKind, detail: &str) {
    if kind.log_level() == Level::ERROR {
        error!(code = %kind, "{}", detail);
    } else {
        warn!(code = %kind, "{}", detail);
    }
}

/// Map a failure condition to its error body, stamped with the current time
pub fn classify(kind: ErrorKind, detail: &str, service: &str) -> ErrorResponse {
    ErrorResponse::new(kind, detail, service, Utc::now())
}
