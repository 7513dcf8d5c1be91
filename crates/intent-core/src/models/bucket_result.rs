use serde::{Deserialize, Serialize};

use super::{BucketMetrics, Cluster, Decision};

/// Metrics as persisted next to a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedMetrics {
    pub message_count: usize,
    pub clusters: Vec<Cluster>,
    pub inter_cluster_similarity: f64,
    pub noise_ratio: f64,
}

impl From<BucketMetrics> for PersistedMetrics {
    fn from(m: BucketMetrics) -> Self {
        Self {
            message_count: m.message_count,
            clusters: m.clusters,
            inter_cluster_similarity: m.inter_cluster_similarity,
            noise_ratio: m.noise_ratio,
        }
    }
}

/// One element of the persisted results array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketResult {
    pub primary_intent: String,
    pub secondary_intent: String,
    pub decision: Decision,
    pub metrics: PersistedMetrics,
}

impl BucketResult {
    pub fn new(metrics: BucketMetrics, decision: Decision) -> Self {
        Self {
            primary_intent: metrics.primary_intent.clone(),
            secondary_intent: metrics.secondary_intent.clone(),
            decision,
            metrics: metrics.into(),
        }
    }
}
