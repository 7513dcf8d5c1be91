use serde::{Deserialize, Serialize};

use super::defaults;

/// Bucket clustering configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Buckets with fewer messages skip clustering entirely.
    pub min_messages: usize,
    /// Lower bound on the HDBSCAN minimum cluster size.
    pub min_cluster_size_floor: usize,
    /// Minimum cluster size as a fraction of the bucket.
    pub min_cluster_size_fraction: f64,
    /// Decimal digits kept on reported cohesion.
    pub cohesion_precision: u32,
}

impl ClusteringConfig {
    /// `max(floor, round(fraction × message_count))`.
    pub fn min_cluster_size(&self, message_count: usize) -> usize {
        let scaled = (self.min_cluster_size_fraction * message_count as f64).round() as usize;
        self.min_cluster_size_floor.max(scaled)
    }
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            min_messages: defaults::DEFAULT_MIN_MESSAGES,
            min_cluster_size_floor: defaults::DEFAULT_MIN_CLUSTER_SIZE_FLOOR,
            min_cluster_size_fraction: defaults::DEFAULT_MIN_CLUSTER_SIZE_FRACTION,
            cohesion_precision: defaults::DEFAULT_COHESION_PRECISION,
        }
    }
}
