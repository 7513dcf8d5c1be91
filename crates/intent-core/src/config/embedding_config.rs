use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding front-end configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Output dimensionality; every vector is checked against it.
    pub dimensions: usize,
    /// Texts per provider call.
    pub batch_size: usize,
    /// Max entries in the in-memory cache tier.
    pub l1_cache_size: u64,
    /// Persistent cache file. `None` disables the on-disk tier.
    pub cache_path: Option<PathBuf>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            cache_path: None,
        }
    }
}
