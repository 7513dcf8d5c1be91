use intent_core::config::*;
use intent_core::errors::{ConfigError, IntentError};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = IntentConfig::from_toml("").unwrap();

    // Clustering defaults
    assert_eq!(config.clustering.min_messages, 5);
    assert_eq!(config.clustering.min_cluster_size_floor, 5);
    assert_eq!(config.clustering.min_cluster_size_fraction, 0.1);
    assert_eq!(config.clustering.cohesion_precision, 3);

    // Decision defaults
    assert_eq!(config.decision.min_bucket_size_split, 20);
    assert_eq!(config.decision.min_bucket_size_missing, 10);
    assert_eq!(config.decision.dominant_cluster_ratio, 0.8);
    assert_eq!(config.decision.min_inter_cluster_similarity_merge, 0.9);

    // Embedding defaults
    assert_eq!(config.embedding.dimensions, 384);
    assert_eq!(config.embedding.batch_size, 64);
    assert!(config.embedding.cache_path.is_none());

    // Pipeline defaults
    assert_eq!(config.pipeline.on_bucket_error, BucketErrorPolicy::Abort);
    assert!(config.pipeline.parallel);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[decision]
min_bucket_size_split = 50
min_cohesion_keep = 0.75

[pipeline]
on_bucket_error = "skip"
"#;
    let config = IntentConfig::from_toml(toml).unwrap();
    assert_eq!(config.decision.min_bucket_size_split, 50);
    assert_eq!(config.decision.min_cohesion_keep, 0.75);
    // Non-overridden fields keep defaults
    assert_eq!(config.decision.min_cluster_ratio, 0.3);
    assert_eq!(config.pipeline.on_bucket_error, BucketErrorPolicy::Skip);
    assert!(config.pipeline.parallel);
}

#[test]
fn config_serde_roundtrip() {
    let config = IntentConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = IntentConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn out_of_range_ratio_is_rejected() {
    let err = IntentConfig::from_toml("[decision]\ndominant_cluster_ratio = 1.5\n").unwrap_err();
    match err {
        IntentError::ConfigError(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field, "decision.dominant_cluster_ratio");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn out_of_range_similarity_is_rejected() {
    let err = IntentConfig::from_toml("[decision]\nmin_cohesion_split = -2.0\n").unwrap_err();
    assert!(err.to_string().contains("min_cohesion_split"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = IntentConfig::from_toml("[decision\n").unwrap_err();
    assert!(matches!(
        err,
        IntentError::ConfigError(ConfigError::ParseFailed { .. })
    ));
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intent.toml");
    std::fs::write(&path, "[clustering]\nmin_messages = 8\n").unwrap();
    let config = IntentConfig::from_file(&path).unwrap();
    assert_eq!(config.clustering.min_messages, 8);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = IntentConfig::from_file(std::path::Path::new("/nonexistent/intent.toml"))
        .unwrap_err();
    assert!(matches!(err, IntentError::Io { .. }));
}

#[test]
fn min_cluster_size_uses_floor_for_small_buckets() {
    let c = ClusteringConfig::default();
    assert_eq!(c.min_cluster_size(5), 5);
    assert_eq!(c.min_cluster_size(49), 5);
    assert_eq!(c.min_cluster_size(54), 5);
}

#[test]
fn min_cluster_size_scales_with_large_buckets() {
    let c = ClusteringConfig::default();
    assert_eq!(c.min_cluster_size(55), 6);
    assert_eq!(c.min_cluster_size(100), 10);
    assert_eq!(c.min_cluster_size(1_000), 100);
}
