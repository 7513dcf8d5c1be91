/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Secondary-intent sentinel emitted when upstream tagging found no confident category.
pub const FLAG_SENTINEL: &str = "FLAG";

/// Label assigned by density clustering to points outside every cluster.
pub const NOISE_LABEL: i32 = -1;

/// Inter-cluster similarity reported when fewer than two clusters exist.
pub const VACUOUS_SIMILARITY: f64 = 1.0;
