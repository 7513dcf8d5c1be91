//! Bucket clustering: HDBSCAN labels → per-cluster statistics → BucketMetrics.

use std::collections::HashMap;

use intent_core::config::ClusteringConfig;
use intent_core::constants::NOISE_LABEL;
use intent_core::errors::IntentResult;
use intent_core::models::{Bucket, BucketMetrics, Cluster, SkipReason};
use tracing::debug;

use crate::density;
use crate::metrics;
use crate::validation;

/// Clusterer bound to one configuration. Holds no per-bucket state.
#[derive(Debug, Clone, Default)]
pub struct BucketClusterer {
    config: ClusteringConfig,
}

impl BucketClusterer {
    pub fn new(config: ClusteringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    pub fn cluster(&self, bucket: &Bucket) -> IntentResult<BucketMetrics> {
        cluster_bucket(bucket, &self.config)
    }
}

/// Cluster one bucket and summarise its structure.
///
/// Buckets below `config.min_messages` are not clustered and come back with
/// `reason = too_few_messages`. Malformed buckets are rejected before that
/// guard.
pub fn cluster_bucket(bucket: &Bucket, config: &ClusteringConfig) -> IntentResult<BucketMetrics> {
    validation::validate_bucket(bucket)?;

    let message_count = bucket.len();
    if message_count < config.min_messages {
        debug!(
            primary = %bucket.primary_intent,
            secondary = %bucket.secondary_intent,
            message_count,
            "skipping clustering: too few messages"
        );
        return Ok(BucketMetrics::skipped(
            bucket.primary_intent.clone(),
            bucket.secondary_intent.clone(),
            message_count,
            SkipReason::TooFewMessages,
        ));
    }

    let points: Vec<Vec<f32>> = bucket.messages.iter().map(|m| m.embedding.clone()).collect();
    let min_cluster_size = config.min_cluster_size(message_count);
    let labels = density::density_labels(&points, min_cluster_size)?;

    let (groups, noise) = group_by_label(&labels);

    let mut clusters = Vec::with_capacity(groups.len());
    let mut centroids = Vec::with_capacity(groups.len());
    for (cluster_id, members) in &groups {
        let member_points: Vec<&[f32]> = members.iter().map(|&i| points[i].as_slice()).collect();
        let centroid = metrics::centroid(&member_points);
        let cohesion = metrics::cohesion(&member_points, &centroid);

        clusters.push(Cluster {
            cluster_id: *cluster_id,
            size: members.len(),
            cohesion: round_to(cohesion, config.cohesion_precision),
        });
        centroids.push(centroid);
    }

    let inter_cluster_similarity = metrics::inter_cluster_similarity(&centroids);
    let noise_ratio = noise as f64 / message_count as f64;

    debug!(
        primary = %bucket.primary_intent,
        secondary = %bucket.secondary_intent,
        message_count,
        min_cluster_size,
        clusters = clusters.len(),
        noise,
        inter_cluster_similarity,
        "bucket clustered"
    );

    Ok(BucketMetrics {
        primary_intent: bucket.primary_intent.clone(),
        secondary_intent: bucket.secondary_intent.clone(),
        message_count,
        clusters,
        inter_cluster_similarity,
        noise_ratio,
        reason: None,
    })
}

/// Group point indices by label, clusters in order of first appearance.
/// Returns the groups and the noise count.
///
/// Raw labels from the density pass are not stable across runs, so each
/// group is renumbered `0..k` by first appearance.
fn group_by_label(labels: &[i32]) -> (Vec<(i32, Vec<usize>)>, usize) {
    let mut groups: Vec<(i32, Vec<usize>)> = Vec::new();
    let mut slot: HashMap<i32, usize> = HashMap::new();
    let mut noise = 0usize;

    for (idx, &label) in labels.iter().enumerate() {
        if label == NOISE_LABEL {
            noise += 1;
            continue;
        }
        let pos = *slot.entry(label).or_insert_with(|| {
            groups.push((groups.len() as i32, Vec::new()));
            groups.len() - 1
        });
        groups[pos].1.push(idx);
    }

    (groups, noise)
}

fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_follow_first_appearance() {
        let (groups, noise) = group_by_label(&[2, -1, 0, 2, 0, -1, 1]);
        let ids: Vec<i32> = groups.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(groups[0].1, vec![0, 3]);
        assert_eq!(groups[1].1, vec![2, 4]);
        assert_eq!(groups[2].1, vec![6]);
        assert_eq!(noise, 2);
    }

    #[test]
    fn swapped_raw_labels_give_identical_groups() {
        let a = group_by_label(&[0, 0, -1, 1, 1]);
        let b = group_by_label(&[1, 1, -1, 0, 0]);
        assert_eq!(a, b);
    }

    #[test]
    fn all_noise_yields_no_groups() {
        let (groups, noise) = group_by_label(&[-1, -1, -1]);
        assert!(groups.is_empty());
        assert_eq!(noise, 3);
    }

    #[test]
    fn rounding_keeps_three_digits() {
        assert_eq!(round_to(0.123_456, 3), 0.123);
        assert_eq!(round_to(0.999_6, 3), 1.0);
        assert_eq!(round_to(-0.456_78, 3), -0.457);
    }
}
