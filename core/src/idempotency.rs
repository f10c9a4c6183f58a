//! Idempotency store abstraction
//!
//! A store remembers the accepted result of a write under the caller's
//! idempotency key so that a retried request can be answered with the
//! previously computed result instead of being applied again. Durable
//! implementations (with key expiry) live outside this crate; the gate only
//! depends on this trait.

use async_trait::async_trait;

use crate::domain::RiskProfile;
use crate::error::Result;

#[async_trait]
pub trait IdempotencyStore: Send + Sync {
    /// Result previously recorded under `key`, if any
    async fn lookup(&self, key: &str) -> Result<Option<RiskProfile>>;

    /// Remember `accepted` as the result for `key`
    async fn record(&self, key: &str, accepted: &RiskProfile) -> Result<()>;
}

/// Store that retains nothing, so every request is evaluated afresh
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughStore;

#[async_trait]
impl IdempotencyStore for PassThroughStore {
    async fn lookup(&self, _key: &str) -> Result<Option<RiskProfile>> {
        Ok(None)
    }

    async fn record(&self, _key: &str, _accepted: &RiskProfile) -> Result<()> {
        Ok(())
    }
}
