mod clustering_config;
pub mod defaults;
mod decision_config;
mod embedding_config;
mod observability_config;
mod pipeline_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use clustering_config::ClusteringConfig;
pub use decision_config::DecisionThresholds;
pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::{BucketErrorPolicy, PipelineConfig};

use crate::errors::{ConfigError, IntentError, IntentResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentConfig {
    pub clustering: ClusteringConfig,
    pub decision: DecisionThresholds,
    pub embedding: EmbeddingConfig,
    pub pipeline: PipelineConfig,
    pub observability: ObservabilityConfig,
}

impl IntentConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> IntentResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: &Path) -> IntentResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| IntentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.decision.validate()?;

        if self.clustering.min_messages == 0 {
            return Err(ConfigError::InvalidValue {
                field: "clustering.min_messages".to_string(),
                value: "0".to_string(),
                expected: "at least 1".to_string(),
            });
        }
        if self.clustering.min_cluster_size_floor < 2 {
            return Err(ConfigError::InvalidValue {
                field: "clustering.min_cluster_size_floor".to_string(),
                value: self.clustering.min_cluster_size_floor.to_string(),
                expected: "at least 2".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.clustering.min_cluster_size_fraction) {
            return Err(ConfigError::InvalidValue {
                field: "clustering.min_cluster_size_fraction".to_string(),
                value: self.clustering.min_cluster_size_fraction.to_string(),
                expected: "a fraction in [0, 1]".to_string(),
            });
        }
        if self.embedding.dimensions == 0 || self.embedding.batch_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "embedding".to_string(),
                value: format!(
                    "dimensions={}, batch_size={}",
                    self.embedding.dimensions, self.embedding.batch_size
                ),
                expected: "non-zero dimensions and batch_size".to_string(),
            });
        }

        Ok(())
    }
}
