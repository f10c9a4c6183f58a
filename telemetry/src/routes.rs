//! Telemetry route definitions

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::TelemetryState;

/// Create the telemetry router
pub fn create_router(state: TelemetryState) -> Router {
    let origins = &state.config.cors_allowed_origins;
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().filter_map(|o| o.parse::<HeaderValue>().ok()))
    };
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/telemetry/health",
            get(handlers::health_check).fallback(handlers::not_found),
        )
        .route(
            "/api/telemetry",
            get(handlers::sample).fallback(handlers::not_found),
        )
        .route(
            "/api/telemetry/error",
            post(handlers::ingest_error).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use chrono::{DateTime, Duration, Utc};
    use serde_json::Value;
    use tower::ServiceExt;
    use vanguard_core::health::{Clock, HealthReporter, ManualClock, SysinfoProbe};

    use super::*;
    use crate::config::TelemetryConfig;

    fn start() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    /// Clock that fails every read
    struct BrokenClock;

    impl Clock for BrokenClock {
        fn now(&self) -> DateTime<Utc> {
            panic!("clock source lost")
        }
    }

    fn test_config() -> TelemetryConfig {
        TelemetryConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }

    fn app(clock: Arc<ManualClock>) -> Router {
        let health = HealthReporter::new(start(), clock.clone(), Arc::new(SysinfoProbe));
        create_router(TelemetryState::new(&test_config(), health, clock))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_reports_uptime_seconds() {
        let clock = Arc::new(ManualClock::new(start()));
        clock.advance(Duration::seconds(90));

        let request = Request::builder()
            .uri("/api/telemetry/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(clock), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "OPERATIONAL");
        assert_eq!(body["service"], "elysium-telemetry-sentinel");
        assert_eq!(body["uptime"], 90);
    }

    #[tokio::test]
    async fn test_sample_within_ranges() {
        let clock = Arc::new(ManualClock::new(start()));
        let request = Request::builder()
            .uri("/api/telemetry")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(clock), request).await;

        assert_eq!(status, StatusCode::OK);
        let velocity = body["mouseVelocity"].as_f64().unwrap();
        assert!((0.0..1500.0).contains(&velocity));
        let delta = body["keystrokeDelta"].as_f64().unwrap();
        assert!((50.0..250.0).contains(&delta));
    }

    #[tokio::test]
    async fn test_ingest_error_returns_receipt() {
        let clock = Arc::new(ManualClock::new(start()));
        let request = Request::builder()
            .method("POST")
            .uri("/api/telemetry/error")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"message": "render failed", "stack": "at App"}"#))
            .unwrap();
        let (status, body) = send(app(clock), request).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "INGESTED");
        assert_eq!(
            body["id"],
            format!("ERR-{}", start().timestamp_millis())
        );
    }

    #[tokio::test]
    async fn test_ingest_malformed_body() {
        let clock = Arc::new(ManualClock::new(start()));
        let request = Request::builder()
            .method("POST")
            .uri("/api/telemetry/error")
            .header("content-type", "application/json")
            .body(Body::from("not json"))
            .unwrap();
        let (status, body) = send(app(clock), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let clock = Arc::new(ManualClock::new(start()));
        let request = Request::builder()
            .method("DELETE")
            .uri("/api/telemetry")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(clock), request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "ENDPOINT_NOT_FOUND");
        assert_eq!(body["detail"], "No handler for DELETE /api/telemetry");
        assert_eq!(body["service"], "elysium-telemetry-sentinel");
    }

    #[tokio::test]
    async fn test_handler_panic_is_internal_fault() {
        let health = HealthReporter::new(
            start(),
            Arc::new(ManualClock::new(start())),
            Arc::new(SysinfoProbe),
        );
        let state = TelemetryState::new(&test_config(), health, Arc::new(BrokenClock));
        let request = Request::builder()
            .uri("/api/telemetry")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(create_router(state), request).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], 500);
        assert_eq!(body["error"], "INTERNAL_FAULT");
        assert_eq!(body["detail"], "clock source lost");
        assert_eq!(body["service"], "elysium-telemetry-sentinel");
    }
}
