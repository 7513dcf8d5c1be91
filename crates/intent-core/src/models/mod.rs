mod bucket;
mod bucket_metrics;
mod bucket_result;
mod decision;
mod message;

pub use bucket::{Bucket, BucketMessage, Embedding};
pub use bucket_metrics::{BucketMetrics, Cluster, SkipReason};
pub use bucket_result::{BucketResult, PersistedMetrics};
pub use decision::{Action, Decision, DecisionConfidence, Justification, JustificationReason};
pub use message::{EmbeddedMessage, RawMessage, TaggedMessage};
