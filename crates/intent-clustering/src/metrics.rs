//! Stateless similarity metrics over embedding vectors.

use intent_core::constants::VACUOUS_SIMILARITY;

/// Cosine similarity between two vectors.
/// Returns 0.0 for zero-length, mismatched, or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Coordinate-wise mean. Empty input yields an empty vector.
pub fn centroid(points: &[&[f32]]) -> Vec<f32> {
    let Some(first) = points.first() else {
        return Vec::new();
    };
    let mut sums = vec![0.0f64; first.len()];
    for p in points {
        for (s, v) in sums.iter_mut().zip(p.iter()) {
            *s += *v as f64;
        }
    }
    let n = points.len() as f64;
    sums.into_iter().map(|s| (s / n) as f32).collect()
}

/// Mean cosine similarity of every point to `centroid`, in [-1, 1].
///
/// `points` must be non-empty; an empty slice yields 0.0.
pub fn cohesion(points: &[&[f32]], centroid: &[f32]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let total: f64 = points
        .iter()
        .map(|p| cosine_similarity(p, centroid))
        .sum();
    total / points.len() as f64
}

/// Mean cosine similarity over all unordered pairs of distinct centroids.
///
/// Fewer than two centroids cannot disagree, so the result is 1.0.
pub fn inter_cluster_similarity(centroids: &[Vec<f32>]) -> f64 {
    if centroids.len() < 2 {
        return VACUOUS_SIMILARITY;
    }
    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, a) in centroids.iter().enumerate() {
        for b in &centroids[i + 1..] {
            total += cosine_similarity(a, b);
            pairs += 1;
        }
    }
    total / pairs as f64
}
