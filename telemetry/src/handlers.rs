//! Telemetry handlers

use std::any::Any;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use vanguard_core::health::{Clock, STATUS_OPERATIONAL};
use vanguard_core::telemetry::{ClientErrorReport, IngestReceipt, TelemetrySample};
use vanguard_core::SERVICE_VERSION;

use crate::error::{TelemetryError, TelemetryResult, SENTINEL_SERVICE_NAME};
use crate::state::TelemetryState;

/// Sentinel health response
#[derive(Debug, Serialize)]
pub struct SentinelHealth {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Whole seconds since start
    pub uptime: u64,
    pub timestamp: DateTime<Utc>,
}

/// Health check endpoint
pub async fn health_check(State(state): State<TelemetryState>) -> Json<SentinelHealth> {
    Json(SentinelHealth {
        status: STATUS_OPERATIONAL,
        service: SENTINEL_SERVICE_NAME,
        version: SERVICE_VERSION,
        uptime: state.health.uptime_seconds(),
        timestamp: state.clock.now(),
    })
}

/// Generate a behavioural telemetry sample
pub async fn sample(State(state): State<TelemetryState>) -> Json<TelemetrySample> {
    let mut rng = rand::thread_rng();
    Json(TelemetrySample::generate(&mut rng, state.clock.now()))
}

/// Ingest an error reported by a client application
pub async fn ingest_error(
    State(state): State<TelemetryState>,
    payload: Result<Json<ClientErrorReport>, JsonRejection>,
) -> TelemetryResult<(StatusCode, Json<IngestReceipt>)> {
    let Json(report) =
        payload.map_err(|rejection| TelemetryError::InvalidRequest(rejection.body_text()))?;
    let now = state.clock.now();
    let reported_at = report
        .timestamp
        .clone()
        .unwrap_or_else(|| now.to_rfc3339());

    error!(
        reported_at = %reported_at,
        error_message = report.message.as_deref().unwrap_or_default(),
        stack = report.stack_excerpt(),
        component = report.component_stack_excerpt(),
        "[ERROR_INGESTED]"
    );

    Ok((StatusCode::CREATED, Json(IngestReceipt::ingested_at(now))))
}

/// Answer requests no route matched
pub async fn not_found(method: Method, uri: Uri) -> TelemetryError {
    TelemetryError::EndpointNotFound(format!("No handler for {} {}", method, uri.path()))
}

/// Convert a handler panic into an internal fault body
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_default();

    TelemetryError::Internal(detail).into_response()
}
