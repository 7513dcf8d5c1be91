//! Hashed term-frequency provider.
//!
//! Each word is hashed into one of `dimensions` buckets and weighted by its
//! frequency in the text. Deterministic and dependency-free, so texts that
//! share words land close together.

use std::collections::HashMap;

use intent_core::errors::IntentResult;
use intent_core::traits::IEmbeddingProvider;

pub struct HashedTfProvider {
    dimensions: usize,
}

impl HashedTfProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn bucket(&self, term: &str) -> usize {
        let digest = blake3::hash(term.as_bytes());
        let mut head = [0u8; 8];
        head.copy_from_slice(&digest.as_bytes()[..8]);
        (u64::from_le_bytes(head) % self.dimensions as u64) as usize
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let mut counts: HashMap<String, f32> = HashMap::new();
        let mut total = 0.0f32;
        for term in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            *counts.entry(term.to_lowercase()).or_default() += 1.0;
            total += 1.0;
        }

        let mut out = vec![0.0f32; self.dimensions];
        if total == 0.0 {
            return out;
        }
        for (term, count) in &counts {
            out[self.bucket(term)] += count / total;
        }

        let norm = out.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            out.iter_mut().for_each(|x| *x /= norm);
        }
        out
    }
}

impl IEmbeddingProvider for HashedTfProvider {
    fn embed(&self, text: &str) -> IntentResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> IntentResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-tf"
    }

    fn is_available(&self) -> bool {
        true
    }
}
