/// Bucket validation and clustering errors.
///
/// Every variant except `ClusteringFailed` is a caller error: the bucket
/// handed to the clusterer was malformed.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("bucket ({primary_intent}, {secondary_intent}) has no messages")]
    EmptyBucket {
        primary_intent: String,
        secondary_intent: String,
    },

    #[error("bucket is missing required field: {field}")]
    MissingField { field: String },

    #[error("message {message_id} has an empty embedding")]
    EmptyEmbedding { message_id: String },

    #[error("dimension mismatch on message {message_id}: expected {expected}, got {actual}")]
    DimensionMismatch {
        message_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("message {message_id} has a non-finite embedding coordinate")]
    NonFiniteEmbedding { message_id: String },

    #[error("clustering failed: {reason}")]
    ClusteringFailed { reason: String },
}
