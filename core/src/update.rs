//! Versioned, idempotency-keyed profile updates

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::RiskProfile;
use crate::error::{CoreError, Result};
use crate::idempotency::IdempotencyStore;
use crate::profile::ProfileProvider;

/// Accepts or rejects proposed profile updates
///
/// A proposal is accepted when its version is not behind the canonical
/// profile's version. Accepted proposals are echoed back unchanged; nothing
/// is merged or persisted here.
#[derive(Clone)]
pub struct UpdateGate {
    provider: Arc<dyn ProfileProvider>,
    store: Arc<dyn IdempotencyStore>,
}

impl UpdateGate {
    pub fn new(provider: Arc<dyn ProfileProvider>, store: Arc<dyn IdempotencyStore>) -> Self {
        Self { provider, store }
    }

    /// Accept `proposed` unless its version is behind the current one
    pub async fn update(&self, idempotency_key: &str, proposed: RiskProfile) -> Result<RiskProfile> {
        let key = idempotency_key.trim();
        if key.is_empty() {
            return Err(CoreError::InvalidRequest(
                "Idempotency key must not be blank".to_string(),
            ));
        }

        info!(idempotency_key = %key, applicant_id = %proposed.applicant_id, "Processing profile update");

        if let Some(previous) = self.store.lookup(key).await? {
            debug!(idempotency_key = %key, "Replaying recorded update result");
            return Ok(previous);
        }

        let current = self.provider.current_profile();
        if proposed.version < current.version {
            warn!(
                applicant_id = %proposed.applicant_id,
                proposed = proposed.version,
                current = current.version,
                "Rejecting stale profile update"
            );
            return Err(CoreError::StaleUpdate {
                proposed: proposed.version,
                current: current.version,
            });
        }

        self.store.record(key, &proposed).await?;

        Ok(proposed)
    }
}
