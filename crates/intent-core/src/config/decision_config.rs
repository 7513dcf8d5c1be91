use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Immutable threshold set consumed by the decision rule engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionThresholds {
    /// Minimum messages before any structural decision is attempted.
    pub min_bucket_size_split: usize,
    /// Minimum cluster size to promote a flagged cluster to a missing intent.
    pub min_bucket_size_missing: usize,
    /// Minimum cohesion to promote a flagged cluster to a missing intent.
    pub min_cohesion_missing: f64,
    /// Largest-cluster share of the bucket required to keep it.
    pub dominant_cluster_ratio: f64,
    /// Largest-cluster cohesion required to keep the bucket.
    pub min_cohesion_keep: f64,
    /// Share of the bucket a split candidate must cover.
    pub min_cluster_ratio: f64,
    /// Cohesion a split candidate must reach.
    pub min_cohesion_split: f64,
    /// Inter-cluster similarity ceiling for a split.
    pub max_inter_cluster_similarity_split: f64,
    /// Inter-cluster similarity floor for a merge.
    pub min_inter_cluster_similarity_merge: f64,
}

impl DecisionThresholds {
    /// Reject threshold sets that can never be met.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = [
            ("decision.dominant_cluster_ratio", self.dominant_cluster_ratio),
            ("decision.min_cluster_ratio", self.min_cluster_ratio),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, value, "a ratio in [0, 1]"));
            }
        }

        let cosine = [
            ("decision.min_cohesion_missing", self.min_cohesion_missing),
            ("decision.min_cohesion_keep", self.min_cohesion_keep),
            ("decision.min_cohesion_split", self.min_cohesion_split),
            (
                "decision.max_inter_cluster_similarity_split",
                self.max_inter_cluster_similarity_split,
            ),
            (
                "decision.min_inter_cluster_similarity_merge",
                self.min_inter_cluster_similarity_merge,
            ),
        ];
        for (field, value) in cosine {
            if !(-1.0..=1.0).contains(&value) {
                return Err(invalid(field, value, "a cosine similarity in [-1, 1]"));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, value: f64, expected: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            min_bucket_size_split: defaults::DEFAULT_MIN_BUCKET_SIZE_SPLIT,
            min_bucket_size_missing: defaults::DEFAULT_MIN_BUCKET_SIZE_MISSING,
            min_cohesion_missing: defaults::DEFAULT_MIN_COHESION_MISSING,
            dominant_cluster_ratio: defaults::DEFAULT_DOMINANT_CLUSTER_RATIO,
            min_cohesion_keep: defaults::DEFAULT_MIN_COHESION_KEEP,
            min_cluster_ratio: defaults::DEFAULT_MIN_CLUSTER_RATIO,
            min_cohesion_split: defaults::DEFAULT_MIN_COHESION_SPLIT,
            max_inter_cluster_similarity_split: defaults::DEFAULT_MAX_INTER_CLUSTER_SIMILARITY_SPLIT,
            min_inter_cluster_similarity_merge: defaults::DEFAULT_MIN_INTER_CLUSTER_SIMILARITY_MERGE,
        }
    }
}
