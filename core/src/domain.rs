//! Domain models for the risk profile service

use serde::{Deserialize, Serialize};

/// Risk level classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate record describing an applicant's risk posture and the
/// operational telemetry shown alongside it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskProfile {
    pub applicant_id: String,
    pub applicant_name: String,
    pub risk_level: RiskLevel,
    /// Composite risk score in [0, 1]
    pub sipr_score: f64,
    /// Workflow step label, e.g. `IDENTITY_SCAN`
    pub current_step: String,
    /// Optimistic-concurrency version, never decreases across accepted updates
    pub version: u64,
    #[serde(default)]
    pub anomalies: Vec<Anomaly>,
    #[serde(default)]
    pub backend: Option<BackendMetrics>,
    #[serde(default)]
    pub pipeline: Option<Pipeline>,
    #[serde(default)]
    pub cluster: Option<Vec<ClusterNode>>,
    #[serde(default)]
    pub services: Option<Vec<ServiceStatus>>,
    #[serde(default)]
    pub security: Option<SecurityPerimeter>,
    #[serde(default)]
    pub collections: Option<Collections>,
    #[serde(default)]
    pub subject_summary: Option<SubjectSummary>,
    /// Opaque audit payload, carried through untouched
    #[serde(default)]
    pub ai_audit: Option<serde_json::Value>,
}

/// Anomaly category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyType {
    Behavioral,
    Metadata,
    Temporal,
    Typographic,
}

/// A detected anomaly attached to a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    /// Unique within the owning profile
    pub id: String,
    #[serde(rename = "type")]
    pub anomaly_type: AnomalyType,
    pub description: String,
    /// Small bounded scale, 1 (minor) to 5 (critical)
    pub severity: u8,
    /// ISO-8601 detection instant
    pub detected_at: String,
}

/// Garbage collector activity reported by the scoring backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GcActivity {
    Idle,
    ZgcRunning,
    Cleanup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendMetrics {
    pub virtual_threads: u32,
    pub heap_usage: f64,
    pub p99_latency: f64,
    pub gc_activity: GcActivity,
    pub error_rate: f64,
    pub kafka_offset: u64,
    pub throughput: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineStatus {
    Success,
    Running,
    Rollback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityGate {
    Passed,
    Failed,
}

/// Delivery pipeline state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    pub current_build: String,
    pub status: PipelineStatus,
    pub test_coverage: f64,
    pub security_gate: SecurityGate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Core,
    Ia,
    Edge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeStatus {
    Healthy,
    Pressure,
    Scaling,
}

/// A node of the serving cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// CPU utilisation percentage
    pub cpu: u32,
    /// Memory utilisation percentage
    pub memory: u32,
    pub pods: u32,
    pub status: NodeStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceState {
    Up,
    Down,
    Degraded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub name: String,
    pub status: ServiceState,
    /// Milliseconds
    pub latency: u32,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPerimeter {
    pub waf_blocked_today: u32,
    pub active_ddos_threat: bool,
    /// Percentage of accounts with MFA enabled
    pub mfa_compliance: u32,
    pub encryption_standard: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionStrategy {
    PreventivePush,
    SoftNegotiation,
    HardNegotiation,
    LegalNuclear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtorCluster {
    Forgetful,
    Illiquid,
    Negligent,
    Fraudulent,
    Negotiation,
}

/// Collections section: open cases plus portfolio-level metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collections {
    #[serde(default)]
    pub cases: Vec<CollectionCase>,
    pub metrics: CollectionMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCase {
    pub loan_id: String,
    pub applicant_name: String,
    pub days_past_due: u32,
    pub amount_due: f64,
    pub strategy: CollectionStrategy,
    pub cluster: DebtorCluster,
    #[serde(default)]
    pub recovery_probability: f64,
    #[serde(default)]
    pub last_interaction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMetrics {
    pub cost_to_collect: f64,
    pub recovery_rate: f64,
    pub cure_rate: f64,
    pub active_negotiations: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSummary {
    pub net_worth: String,
    pub credit_score: u32,
    pub liabilities: String,
}
