//! Behavioural telemetry signals and client error reports

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Longest stack excerpt kept when logging a client error report
pub const MAX_STACK_EXCERPT: usize = 200;

/// One sample of behavioural biometric signals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySample {
    /// Pixels per second, in [0, 1500)
    pub mouse_velocity: f64,
    /// In [0, 1)
    pub scroll_consistency: f64,
    /// Milliseconds between keystrokes, in [50, 250)
    pub keystroke_delta: f64,
    /// Degrees, in [0, 360)
    pub device_orientation: f64,
    /// In [0, 1)
    pub session_entropy: f64,
    pub timestamp: DateTime<Utc>,
}

impl TelemetrySample {
    /// Draw a sample from `rng`, stamped with `timestamp`
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, timestamp: DateTime<Utc>) -> Self {
        Self {
            mouse_velocity: round_to(rng.gen_range(0.0..1500.0), 2),
            scroll_consistency: round_to(rng.gen::<f64>(), 4),
            keystroke_delta: round_to(50.0 + rng.gen_range(0.0..200.0), 1),
            device_orientation: round_to(rng.gen_range(0.0..360.0), 1),
            session_entropy: round_to(rng.gen::<f64>(), 6),
            timestamp,
        }
    }
}

/// Round down to `places` decimal places so values stay inside their range
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).floor() / factor
}

/// Error report posted by a client application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientErrorReport {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub stack: Option<String>,
    #[serde(default)]
    pub component_stack: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl ClientErrorReport {
    pub fn stack_excerpt(&self) -> Option<&str> {
        self.stack.as_deref().map(excerpt)
    }

    pub fn component_stack_excerpt(&self) -> Option<&str> {
        self.component_stack.as_deref().map(excerpt)
    }
}

/// Acknowledgement for an ingested client error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestReceipt {
    pub status: String,
    pub id: String,
}

impl IngestReceipt {
    pub fn ingested_at(at: DateTime<Utc>) -> Self {
        Self {
            status: "INGESTED".to_string(),
            id: format!("ERR-{}", at.timestamp_millis()),
        }
    }
}

/// First `MAX_STACK_EXCERPT` characters of `text`
fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(MAX_STACK_EXCERPT) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
