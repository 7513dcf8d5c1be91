//! # intent-core
//!
//! Foundation crate for intent taxonomy maintenance.
//! Defines the bucket/metrics/decision data model, traits, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::IntentConfig;
pub use errors::{IntentError, IntentResult};
pub use models::{
    Action, Bucket, BucketMessage, BucketMetrics, Cluster, Decision, DecisionConfidence,
    Embedding, Justification, JustificationReason, SkipReason,
};
