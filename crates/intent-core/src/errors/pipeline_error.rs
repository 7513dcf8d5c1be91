/// Orchestration errors.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("invalid input at line {line}, column {column}: {reason}")]
    InvalidInput {
        line: usize,
        column: usize,
        reason: String,
    },

    #[error("bucket ({primary_intent}, {secondary_intent}) failed: {reason}")]
    BucketFailed {
        primary_intent: String,
        secondary_intent: String,
        reason: String,
    },

    #[error("message {message_id} is missing {field}")]
    IncompleteMessage { message_id: String, field: String },
}
