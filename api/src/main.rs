//! Vanguard Risk API Server

mod config;
mod error;
mod handlers;
mod routes;
mod state;


use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vanguard_core::health::HealthReporter;
use vanguard_core::{SERVICE_NAME, SERVICE_VERSION};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Uptime is measured from here
    let health = HealthReporter::start_now();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,vanguard_api=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::AppConfig::from_env()?;

    info!("Starting {} v{}", SERVICE_NAME, SERVICE_VERSION);
    info!("Listening on {}:{}", config.host, config.port);

    // Create application state
    let state = state::AppState::new(&config, health);

    // Build router
    let app = routes::create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid HOST/PORT")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app).await?;

    Ok(())
}
