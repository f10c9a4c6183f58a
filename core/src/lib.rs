//! Vanguard Core Library
//!
//! Contains the risk profile domain model, the profile provider and update
//! gate, the error taxonomy shared by the HTTP services, and health reporting.

pub mod domain;
pub mod error;
pub mod health;
pub mod idempotency;
pub mod profile;
pub mod telemetry;
pub mod update;

pub use error::{CoreError, ErrorKind, ErrorResponse, Result};

/// Service identifier carried in every response of the risk API
pub const SERVICE_NAME: &str = "elysium-vanguard-cortex";
/// Release reported by the health endpoints
pub const SERVICE_VERSION: &str = "2.0.0-aegis";
