//! Liveness and uptime reporting

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sysinfo::System;

use crate::{SERVICE_NAME, SERVICE_VERSION};

/// Status label reported while the service is serving
pub const STATUS_OPERATIONAL: &str = "OPERATIONAL";
/// Name of the risk assessment subsystem
pub const RISK_SUBSYSTEM: &str = "risk-assessment-engine";
/// Placeholder for diagnostics that could not be read
pub const UNKNOWN: &str = "unknown";

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *now = *now + by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// A diagnostic figure, or the `"unknown"` sentinel when it cannot be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Diagnostic<T> {
    Known(T),
    Unknown(String),
}

impl<T> Diagnostic<T> {
    pub fn unknown() -> Self {
        Diagnostic::Unknown(UNKNOWN.to_string())
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Diagnostic::Known(_))
    }
}

impl<T> From<Option<T>> for Diagnostic<T> {
    fn from(value: Option<T>) -> Self {
        value.map(Diagnostic::Known).unwrap_or_else(Diagnostic::unknown)
    }
}

/// Process and host figures reported with the health snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeDiagnostics {
    #[serde(rename = "maxMemoryMB")]
    pub max_memory_mb: Diagnostic<u64>,
    #[serde(rename = "usedMemoryMB")]
    pub used_memory_mb: Diagnostic<u64>,
    pub available_processors: Diagnostic<usize>,
    pub rust_version: Diagnostic<String>,
}

/// Reads runtime diagnostics from the environment
pub trait DiagnosticsProbe: Send + Sync {
    fn sample(&self) -> RuntimeDiagnostics;
}

/// Probe backed by `sysinfo` and the standard library
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoProbe;

impl DiagnosticsProbe for SysinfoProbe {
    fn sample(&self) -> RuntimeDiagnostics {
        let mut sys = System::new();
        sys.refresh_memory();

        let total = sys.total_memory();
        let max_memory_mb = (total > 0).then(|| total / BYTES_PER_MB);

        let used_memory_mb = sysinfo::get_current_pid().ok().and_then(|pid| {
            sys.refresh_process(pid);
            sys.process(pid).map(|process| process.memory() / BYTES_PER_MB)
        });

        let available_processors = std::thread::available_parallelism()
            .ok()
            .map(|n| n.get());

        let rust_version = option_env!("VANGUARD_RUSTC_VERSION")
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        RuntimeDiagnostics {
            max_memory_mb: max_memory_mb.into(),
            used_memory_mb: used_memory_mb.into(),
            available_processors: available_processors.into(),
            rust_version: rust_version.into(),
        }
    }
}

/// Service liveness snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Elapsed time since start as `HH:MM:SS`
    pub uptime: String,
    pub uptime_seconds: u64,
    pub timestamp: DateTime<Utc>,
    pub runtime: RuntimeDiagnostics,
}

/// Health of a single subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsystemHealth {
    pub status: String,
    pub subsystem: String,
    pub timestamp: DateTime<Utc>,
}

/// Computes health snapshots relative to a start instant captured once
#[derive(Clone)]
pub struct HealthReporter {
    started_at: DateTime<Utc>,
    clock: Arc<dyn Clock>,
    probe: Arc<dyn DiagnosticsProbe>,
}

impl HealthReporter {
    pub fn new(
        started_at: DateTime<Utc>,
        clock: Arc<dyn Clock>,
        probe: Arc<dyn DiagnosticsProbe>,
    ) -> Self {
        Self {
            started_at,
            clock,
            probe,
        }
    }

    /// Reporter for a process starting now on the wall clock
    pub fn start_now() -> Self {
        let clock = Arc::new(SystemClock);
        Self::new(clock.now(), clock, Arc::new(SysinfoProbe))
    }

    /// Whole seconds since start, zero if the clock reads earlier than start
    pub fn uptime_seconds(&self) -> u64 {
        self.uptime_at(self.clock.now())
    }

    fn uptime_at(&self, now: DateTime<Utc>) -> u64 {
        u64::try_from((now - self.started_at).num_seconds()).unwrap_or(0)
    }

    pub fn health(&self) -> HealthSnapshot {
        let timestamp = self.clock.now();
        let uptime_seconds = self.uptime_at(timestamp);

        HealthSnapshot {
            status: STATUS_OPERATIONAL.to_string(),
            service: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            uptime: format_uptime(uptime_seconds),
            uptime_seconds,
            timestamp,
            runtime: self.probe.sample(),
        }
    }

    pub fn risk_subsystem_health(&self) -> SubsystemHealth {
        SubsystemHealth {
            status: STATUS_OPERATIONAL.to_string(),
            subsystem: RISK_SUBSYSTEM.to_string(),
            timestamp: self.clock.now(),
        }
    }
}

/// Format seconds as zero-padded `HH:MM:SS`; hours are unbounded
pub fn format_uptime(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
