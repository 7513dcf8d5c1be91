use super::{ClusteringError, ConfigError, EmbeddingError, PipelineError};

/// Top-level error type. Subsystem errors convert into it via `From`.
#[derive(Debug, thiserror::Error)]
pub enum IntentError {
    #[error("clustering error: {0}")]
    ClusteringError(#[from] ClusteringError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("pipeline error: {0}")]
    PipelineError(#[from] PipelineError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used across the workspace.
pub type IntentResult<T> = Result<T, IntentError>;
