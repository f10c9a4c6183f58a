//! Vanguard Telemetry Sentinel
//!
//! Serves behavioural telemetry samples and ingests client-side error reports.

mod config;
mod error;
mod handlers;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vanguard_core::health::{Clock, HealthReporter, SysinfoProbe, SystemClock};
use vanguard_core::SERVICE_VERSION;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let health = HealthReporter::new(clock.now(), clock.clone(), Arc::new(SysinfoProbe));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,vanguard_telemetry=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::TelemetryConfig::from_env()?;

    info!(
        "Starting {} v{}",
        error::SENTINEL_SERVICE_NAME,
        SERVICE_VERSION
    );
    info!("Listening on {}", config.bind_addr());

    let state = state::TelemetryState::new(&config, health, clock);
    let app = routes::create_router(state);

    let addr: SocketAddr = config.bind_addr().parse().context("Invalid HOST/PORT")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Status: {}", vanguard_core::health::STATUS_OPERATIONAL);
    axum::serve(listener, app).await?;

    Ok(())
}
