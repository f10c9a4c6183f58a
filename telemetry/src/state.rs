//! Telemetry service state

use std::sync::Arc;

use vanguard_core::health::{Clock, HealthReporter};

use crate::config::TelemetryConfig;

/// Shared service state
#[derive(Clone)]
pub struct TelemetryState {
    /// Uptime relative to process start
    pub health: HealthReporter,
    /// Time source for samples and receipts
    pub clock: Arc<dyn Clock>,
    /// Configuration
    pub config: Arc<TelemetryConfig>,
}

impl TelemetryState {
    pub fn new(config: &TelemetryConfig, health: HealthReporter, clock: Arc<dyn Clock>) -> Self {
        Self {
            health,
            clock,
            config: Arc::new(config.clone()),
        }
    }
}
