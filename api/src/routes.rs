//! API route definitions

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Health checks
        .route(
            "/api/health",
            get(handlers::health_check).fallback(handlers::not_found),
        )
        .route(
            "/api/risk/health",
            get(handlers::risk_health).fallback(handlers::not_found),
        )
        // Risk profile
        .route(
            "/api/risk/profile",
            get(handlers::risk::get_profile).fallback(handlers::not_found),
        )
        .route(
            "/api/risk/profile/update",
            post(handlers::risk::update_profile).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        // Layers
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
