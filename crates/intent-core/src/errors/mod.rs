mod clustering_error;
mod config_error;
mod embedding_error;
mod intent_error;
mod pipeline_error;

pub use clustering_error::ClusteringError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use intent_error::{IntentError, IntentResult};
pub use pipeline_error::PipelineError;
