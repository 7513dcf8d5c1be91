use serde::{Deserialize, Serialize};

use crate::constants::{FLAG_SENTINEL, VACUOUS_SIMILARITY};

/// A connected, non-noise group discovered inside one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub cluster_id: i32,
    /// Always at least 1.
    pub size: usize,
    /// Mean cosine similarity of members to their centroid, in [-1, 1].
    pub cohesion: f64,
}

/// Why clustering was skipped for a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    TooFewMessages,
}

/// Structural summary of one bucket, consumed by the decision engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketMetrics {
    pub primary_intent: String,
    pub secondary_intent: String,
    pub message_count: usize,
    pub clusters: Vec<Cluster>,
    /// Exactly 1.0 when fewer than two clusters exist.
    pub inter_cluster_similarity: f64,
    /// Fraction of the bucket labeled noise, in [0, 1].
    pub noise_ratio: f64,
    /// Set only when clustering was skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<SkipReason>,
}

impl BucketMetrics {
    /// Metrics for a bucket that was not clustered.
    pub fn skipped(
        primary_intent: impl Into<String>,
        secondary_intent: impl Into<String>,
        message_count: usize,
        reason: SkipReason,
    ) -> Self {
        Self {
            primary_intent: primary_intent.into(),
            secondary_intent: secondary_intent.into(),
            message_count,
            clusters: Vec::new(),
            inter_cluster_similarity: VACUOUS_SIMILARITY,
            noise_ratio: 1.0,
            reason: Some(reason),
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.secondary_intent == FLAG_SENTINEL
    }

    /// Largest cluster, first one wins on ties. `None` for an empty cluster list.
    pub fn dominant_cluster(&self) -> Option<&Cluster> {
        self.clusters
            .iter()
            .fold(None, |best: Option<&Cluster>, c| match best {
                Some(b) if b.size >= c.size => Some(b),
                _ => Some(c),
            })
    }

    /// Share of the bucket covered by `cluster`. Zero for an empty bucket.
    pub fn coverage(&self, cluster: &Cluster) -> f64 {
        if self.message_count == 0 {
            0.0
        } else {
            cluster.size as f64 / self.message_count as f64
        }
    }
}
