//! Property tests for bucket clustering invariants.

use proptest::prelude::*;

use intent_clustering::{cluster_bucket, inter_cluster_similarity};
use intent_core::config::ClusteringConfig;
use test_fixtures::bucket_from_points;

fn points_strategy() -> impl Strategy<Value = Vec<Vec<f32>>> {
    (5usize..40, 2usize..6).prop_flat_map(|(n, dims)| {
        prop::collection::vec(prop::collection::vec(-10.0f32..10.0, dims), n)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_metric_ranges_hold(points in points_strategy()) {
        let n = points.len();
        let bucket = bucket_from_points("logistics", "order_status", points);
        let m = cluster_bucket(&bucket, &ClusteringConfig::default()).unwrap();

        prop_assert_eq!(m.message_count, n);
        prop_assert!((0.0..=1.0).contains(&m.noise_ratio));
        for c in &m.clusters {
            prop_assert!(c.size >= 1);
            prop_assert!((-1.0..=1.0).contains(&c.cohesion));
        }
        if m.clusters.len() >= 2 {
            prop_assert!((-1.0..=1.0).contains(&m.inter_cluster_similarity));
        } else {
            prop_assert_eq!(m.inter_cluster_similarity, 1.0);
        }
    }

    #[test]
    fn prop_noise_ratio_is_one_iff_no_clusters(points in points_strategy()) {
        let bucket = bucket_from_points("logistics", "order_status", points);
        let m = cluster_bucket(&bucket, &ClusteringConfig::default()).unwrap();

        let clustered: usize = m.clusters.iter().map(|c| c.size).sum();
        let expected = (m.message_count - clustered) as f64 / m.message_count as f64;
        prop_assert!((m.noise_ratio - expected).abs() < 1e-12);
        prop_assert_eq!(m.noise_ratio == 1.0, m.clusters.is_empty());
    }

    #[test]
    fn prop_clustering_is_deterministic(points in points_strategy()) {
        let bucket = bucket_from_points("a", "b", points);
        let config = ClusteringConfig::default();
        let first = cluster_bucket(&bucket, &config).unwrap();
        let second = cluster_bucket(&bucket, &config).unwrap();
        let ids: Vec<i32> = first.clusters.iter().map(|c| c.cluster_id).collect();
        prop_assert_eq!(ids, (0..first.clusters.len() as i32).collect::<Vec<_>>());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_inter_cluster_similarity_order_independent(
        centroids in prop::collection::vec(prop::collection::vec(-5.0f32..5.0, 3), 0..8)
    ) {
        let mut reversed = centroids.clone();
        reversed.reverse();
        let a = inter_cluster_similarity(&centroids);
        let b = inter_cluster_similarity(&reversed);
        prop_assert!((a - b).abs() < 1e-9);
    }
}
