//! HDBSCAN labelling in Euclidean space.

use hdbscan::{Hdbscan, HdbscanHyperParams};
use intent_core::errors::ClusteringError;

/// Label every point with a cluster id, or `NOISE_LABEL` (-1).
///
/// Membership is stable for identical input but the label numbers are not:
/// the same partition can come back as `[0, 1]` on one run and `[1, 0]` on
/// the next. Callers renumber before exposing ids.
#[allow(clippy::ptr_arg)] // hdbscan takes `&Vec<Vec<T>>`
pub fn density_labels(
    points: &Vec<Vec<f32>>,
    min_cluster_size: usize,
) -> Result<Vec<i32>, ClusteringError> {
    // Core distances need a neighbour other than the point itself.
    let min_samples = min_cluster_size.min(points.len().saturating_sub(1)).max(1);

    let hyper_params = HdbscanHyperParams::builder()
        .min_cluster_size(min_cluster_size)
        .min_samples(min_samples)
        .build();

    Hdbscan::new(points, hyper_params)
        .cluster()
        .map_err(|e| ClusteringError::ClusteringFailed {
            reason: format!("{e:?}"),
        })
}
