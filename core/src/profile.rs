//! Canonical risk profile source

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::domain::{
    Anomaly, AnomalyType, BackendMetrics, ClusterNode, CollectionCase, CollectionMetrics,
    CollectionStrategy, Collections, DebtorCluster, GcActivity, NodeStatus, NodeType, Pipeline,
    PipelineStatus, RiskLevel, RiskProfile, SecurityGate, SecurityPerimeter, ServiceState,
    ServiceStatus, SubjectSummary,
};

/// Version carried by the canonical sample profile
pub const SAMPLE_PROFILE_VERSION: u64 = 10;

/// Source of the current canonical profile
#[cfg_attr(test, mockall::automock)]
pub trait ProfileProvider: Send + Sync {
    /// Produce the current profile snapshot
    fn current_profile(&self) -> RiskProfile;
}

/// Provider backed by a fixed sample applicant
///
/// Every call builds a fresh profile; only anomaly ids and detection
/// timestamps differ between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProfileProvider;

impl SampleProfileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ProfileProvider for SampleProfileProvider {
    fn current_profile(&self) -> RiskProfile {
        sample_profile()
    }
}

fn sample_profile() -> RiskProfile {
    RiskProfile {
        applicant_id: "SARAH_CONNOR_9LX".to_string(),
        applicant_name: "SARAH CONNOR".to_string(),
        risk_level: RiskLevel::Critical,
        sipr_score: 0.982,
        current_step: "IDENTITY_SCAN".to_string(),
        version: SAMPLE_PROFILE_VERSION,
        anomalies: vec![Anomaly {
            id: Uuid::new_v4().to_string(),
            anomaly_type: AnomalyType::Behavioral,
            description: "High velocity keystroke detected".to_string(),
            severity: 2,
            detected_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }],
        backend: Some(BackendMetrics {
            virtual_threads: 1024,
            heap_usage: 45.2,
            p99_latency: 12.45,
            gc_activity: GcActivity::Idle,
            error_rate: 0.0001,
            kafka_offset: 8_210_455,
            throughput: 4821,
        }),
        pipeline: Some(Pipeline {
            current_build: "v6.4.2-GOLD".to_string(),
            status: PipelineStatus::Success,
            test_coverage: 98.5,
            security_gate: SecurityGate::Passed,
        }),
        cluster: Some(vec![
            cluster_node("NODE_ALPHA_01", NodeType::Core, 42, 58, 12),
            cluster_node("NODE_BETA_02", NodeType::Ia, 35, 61, 8),
        ]),
        services: Some(vec![
            service("AUTH_GATEWAY", 4, "2.1.0"),
            service("RISK_ENGINE", 11, "1.8.4"),
        ]),
        security: Some(SecurityPerimeter {
            waf_blocked_today: 48_210,
            active_ddos_threat: false,
            mfa_compliance: 100,
            encryption_standard: "AES-256GCM".to_string(),
        }),
        collections: Some(Collections {
            cases: vec![CollectionCase {
                loan_id: "LN-AEGIS-SARAH".to_string(),
                applicant_name: "SARAH CONNOR".to_string(),
                days_past_due: 35,
                amount_due: 500_000.0,
                strategy: CollectionStrategy::HardNegotiation,
                cluster: DebtorCluster::Negotiation,
                recovery_probability: 0.0,
                last_interaction: None,
            }],
            metrics: CollectionMetrics {
                cost_to_collect: 1250.45,
                recovery_rate: 0.35,
                cure_rate: 0.12,
                active_negotiations: 24,
            },
        }),
        subject_summary: Some(SubjectSummary {
            net_worth: "5.2M".to_string(),
            credit_score: 840,
            liabilities: "120K".to_string(),
        }),
        ai_audit: None,
    }
}

fn cluster_node(id: &str, node_type: NodeType, cpu: u32, memory: u32, pods: u32) -> ClusterNode {
    ClusterNode {
        id: id.to_string(),
        node_type,
        cpu,
        memory,
        pods,
        status: NodeStatus::Healthy,
    }
}

fn service(name: &str, latency: u32, version: &str) -> ServiceStatus {
    ServiceStatus {
        name: name.to_string(),
        status: ServiceState::Up,
        latency,
        version: version.to_string(),
    }
}
