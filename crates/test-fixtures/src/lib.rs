//! Shared fixtures for intent taxonomy tests: golden decision cases and
//! deterministic synthetic embeddings.

use std::path::PathBuf;

use intent_core::config::DecisionThresholds;
use intent_core::models::{Action, Bucket, BucketMessage, BucketMetrics, DecisionConfidence};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the golden fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// Expected outcome of a golden decision case.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedDecision {
    pub action: Action,
    pub confidence: DecisionConfidence,
    pub reason: String,
    #[serde(default)]
    pub cluster_id: Option<i32>,
}

/// One golden decision case: metrics in, expected decision out.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionFixture {
    pub description: String,
    #[serde(default)]
    pub thresholds: DecisionThresholds,
    pub metrics: BucketMetrics,
    pub expected: ExpectedDecision,
}

/// Load every golden decision case.
pub fn decision_fixtures() -> Vec<(PathBuf, DecisionFixture)> {
    list_fixtures("decisions")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| format!("decisions/{}", n.to_string_lossy()))
                .unwrap_or_default();
            let fixture = load_fixture(&name);
            (path, fixture)
        })
        .collect()
}

/// Deterministic pseudo-random value in [-1, 1] derived from the inputs.
pub fn jitter(seed: u64, index: usize, dim: usize) -> f32 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&seed.to_le_bytes());
    hasher.update(&(index as u64).to_le_bytes());
    hasher.update(&(dim as u64).to_le_bytes());
    let bytes = hasher.finalize();
    let raw = u16::from_le_bytes([bytes.as_bytes()[0], bytes.as_bytes()[1]]);
    (raw as f32 / u16::MAX as f32) * 2.0 - 1.0
}

/// `count` points scattered around `center`, each coordinate within `±spread`.
pub fn blob(center: &[f32], count: usize, spread: f32, seed: u64) -> Vec<Vec<f32>> {
    (0..count)
        .map(|i| {
            center
                .iter()
                .enumerate()
                .map(|(d, c)| c + spread * jitter(seed, i, d))
                .collect()
        })
        .collect()
}

/// Unit axis scaled by `magnitude`: a well-separated blob center.
pub fn axis(dims: usize, axis: usize, magnitude: f32) -> Vec<f32> {
    let mut v = vec![0.0; dims];
    v[axis % dims] = magnitude;
    v
}

/// Wrap raw points into a bucket with `msg_{i+1}` ids.
pub fn bucket_from_points(primary: &str, secondary: &str, points: Vec<Vec<f32>>) -> Bucket {
    let messages = points
        .into_iter()
        .enumerate()
        .map(|(i, embedding)| BucketMessage {
            message_id: format!("msg_{}", i + 1),
            embedding,
        })
        .collect();
    Bucket::new(primary, secondary, messages)
}

/// Two well-separated blobs of `per_blob` points on orthogonal axes.
pub fn two_blob_bucket(per_blob: usize, dims: usize) -> Bucket {
    let mut points = blob(&axis(dims, 0, 10.0), per_blob, 0.05, 1);
    points.extend(blob(&axis(dims, 1, 10.0), per_blob, 0.05, 2));
    bucket_from_points("logistics", "order_status", points)
}
