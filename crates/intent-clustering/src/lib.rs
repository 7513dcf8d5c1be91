//! # intent-clustering
//!
//! Density-based clustering of one intent bucket and the metrics the
//! decision engine reads: per-cluster size and cohesion, noise ratio, and
//! inter-cluster similarity.
//!
//! Clustering runs HDBSCAN in Euclidean space while cohesion and similarity
//! are cosine-based. The two notions of closeness can disagree; that is the
//! reference behavior and is kept as-is.

pub mod clusterer;
pub mod density;
pub mod metrics;
pub mod validation;

pub use clusterer::{cluster_bucket, BucketClusterer};
pub use metrics::{centroid, cohesion, cosine_similarity, inter_cluster_similarity};
