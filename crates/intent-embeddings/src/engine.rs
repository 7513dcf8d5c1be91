//! EmbeddingEngine: the entry point for intent-embeddings.

use std::collections::{HashMap, HashSet};

use intent_core::config::EmbeddingConfig;
use intent_core::errors::{EmbeddingError, IntentResult};
use intent_core::models::{EmbeddedMessage, TaggedMessage};
use intent_core::traits::IEmbeddingProvider;
use tracing::{debug, info, warn};

use crate::cache::CacheCoordinator;
use crate::preprocess::{content_hash, preprocess};
use crate::providers;

pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: CacheCoordinator,
    config: EmbeddingConfig,
}

impl EmbeddingEngine {
    /// Engine with the default provider.
    pub fn new(config: EmbeddingConfig) -> IntentResult<Self> {
        let provider = providers::create_provider(&config);
        Self::with_provider(config, provider)
    }

    pub fn with_provider(
        config: EmbeddingConfig,
        provider: Box<dyn IEmbeddingProvider>,
    ) -> IntentResult<Self> {
        if !provider.is_available() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: provider.name().to_string(),
            }
            .into());
        }
        let cache = CacheCoordinator::new(config.l1_cache_size, config.cache_path.as_deref())?;

        info!(
            provider = provider.name(),
            dims = config.dimensions,
            persistent_cache = cache.has_persistent_tier(),
            "EmbeddingEngine initialized"
        );

        Ok(Self {
            provider,
            cache,
            config,
        })
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    /// Embed tagged messages, preserving input order.
    ///
    /// Messages whose text preprocesses to nothing are dropped. Identical
    /// texts are embedded once. The on-disk cache is saved before returning.
    pub fn embed_messages(
        &mut self,
        messages: &[TaggedMessage],
    ) -> IntentResult<Vec<EmbeddedMessage>> {
        let prepared: Vec<(&TaggedMessage, String, String)> = messages
            .iter()
            .filter_map(|m| {
                let text = preprocess(&m.text);
                (!text.is_empty()).then(|| (m, content_hash(&text), text))
            })
            .collect();

        let mut resolved: HashMap<String, Vec<f32>> = HashMap::new();
        let mut queued: HashSet<&str> = HashSet::new();
        let mut misses: Vec<(String, String)> = Vec::new();

        for (_, key, text) in &prepared {
            if resolved.contains_key(key) || queued.contains(key.as_str()) {
                continue;
            }
            match self.cache.get(key) {
                (Some(v), tier) if v.len() == self.config.dimensions => {
                    debug!(key = %key, tier = ?tier, "embedding cache hit");
                    resolved.insert(key.clone(), v);
                }
                (Some(v), _) => {
                    warn!(
                        key = %key,
                        expected = self.config.dimensions,
                        actual = v.len(),
                        "cached embedding has wrong dimensions, re-embedding"
                    );
                    queued.insert(key.as_str());
                    misses.push((key.clone(), text.clone()));
                }
                (None, _) => {
                    queued.insert(key.as_str());
                    misses.push((key.clone(), text.clone()));
                }
            }
        }

        let batch_size = self.config.batch_size.max(1);
        for chunk in misses.chunks(batch_size) {
            let texts: Vec<String> = chunk.iter().map(|(_, t)| t.clone()).collect();
            let vectors = self.provider.embed_batch(&texts)?;
            if vectors.len() != chunk.len() {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!(
                        "provider returned {} vectors for {} texts",
                        vectors.len(),
                        chunk.len()
                    ),
                }
                .into());
            }
            for ((key, _), vector) in chunk.iter().zip(vectors) {
                if vector.len() != self.config.dimensions {
                    return Err(EmbeddingError::DimensionMismatch {
                        expected: self.config.dimensions,
                        actual: vector.len(),
                    }
                    .into());
                }
                self.cache.put(key.clone(), &vector);
                resolved.insert(key.clone(), vector);
            }
        }

        self.cache.flush()?;

        info!(
            messages = messages.len(),
            embedded = prepared.len(),
            skipped = messages.len() - prepared.len(),
            provider_calls = misses.len().div_ceil(batch_size),
            cache_hits = resolved.len() - misses.len(),
            "messages embedded"
        );

        prepared
            .into_iter()
            .map(|(m, key, _)| {
                let embedding = resolved.get(&key).cloned().ok_or_else(|| {
                    EmbeddingError::InferenceFailed {
                        reason: format!("no embedding produced for message {}", m.message_id),
                    }
                })?;
                Ok(EmbeddedMessage {
                    message_id: m.message_id.clone(),
                    text: Some(m.text.clone()),
                    primary_intent: m.primary_intent.clone(),
                    secondary_intent: m.secondary_intent.clone(),
                    embedding,
                })
            })
            .collect()
    }
}
