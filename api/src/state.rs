//! Application state

use std::sync::Arc;

use vanguard_core::health::HealthReporter;
use vanguard_core::idempotency::PassThroughStore;
use vanguard_core::profile::{ProfileProvider, SampleProfileProvider};
use vanguard_core::update::UpdateGate;

use crate::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Canonical profile source
    pub profiles: Arc<dyn ProfileProvider>,
    /// Gate for incoming profile updates
    pub update_gate: UpdateGate,
    /// Uptime and diagnostics
    pub health: HealthReporter,
    /// Configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new application state around a health reporter whose start
    /// instant was captured at process startup
    pub fn new(config: &AppConfig, health: HealthReporter) -> Self {
        let profiles: Arc<dyn ProfileProvider> = Arc::new(SampleProfileProvider::new());
        let update_gate = UpdateGate::new(profiles.clone(), Arc::new(PassThroughStore));

        Self {
            profiles,
            update_gate,
            health,
            config: Arc::new(config.clone()),
        }
    }
}
