use serde::{Deserialize, Serialize};

use super::defaults;

/// What the orchestrator does when one bucket fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketErrorPolicy {
    /// Stop the run and surface the error.
    #[default]
    Abort,
    /// Log the error and continue without a record for that bucket.
    Skip,
}

/// Orchestrator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub on_bucket_error: BucketErrorPolicy,
    /// Process buckets on the rayon pool.
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            on_bucket_error: BucketErrorPolicy::default(),
            parallel: defaults::DEFAULT_PARALLEL,
        }
    }
}
