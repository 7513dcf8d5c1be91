//! Embedding providers.

mod hashed_tf;

pub use hashed_tf::HashedTfProvider;

use intent_core::config::EmbeddingConfig;
use intent_core::traits::IEmbeddingProvider;

/// The provider the engine uses when none is injected.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    Box::new(HashedTfProvider::new(config.dimensions))
}
