//! Two-tier embedding cache: moka in memory, JSON file on disk.

mod l1_memory;
mod l2_file;

pub use l1_memory::L1MemoryCache;
pub use l2_file::L2FileCache;

use std::path::Path;

use intent_core::errors::IntentResult;

/// Which tier answered a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTier {
    L1,
    L2,
}

/// Reads L1 then L2, promoting L2 hits; writes through to both.
pub struct CacheCoordinator {
    l1: L1MemoryCache,
    l2: Option<L2FileCache>,
}

impl CacheCoordinator {
    pub fn new(l1_capacity: u64, l2_path: Option<&Path>) -> IntentResult<Self> {
        let l2 = l2_path.map(L2FileCache::open).transpose()?;
        Ok(Self {
            l1: L1MemoryCache::new(l1_capacity),
            l2,
        })
    }

    pub fn get(&self, key: &str) -> (Option<Vec<f32>>, Option<CacheTier>) {
        if let Some(v) = self.l1.get(key) {
            return (Some(v), Some(CacheTier::L1));
        }
        if let Some(v) = self.l2.as_ref().and_then(|l2| l2.get(key)) {
            self.l1.insert(key.to_string(), v.clone());
            return (Some(v), Some(CacheTier::L2));
        }
        (None, None)
    }

    pub fn put(&mut self, key: String, embedding: &[f32]) {
        if let Some(l2) = self.l2.as_mut() {
            l2.insert(key.clone(), embedding.to_vec());
        }
        self.l1.insert(key, embedding.to_vec());
    }

    /// Persist the on-disk tier if it changed.
    pub fn flush(&mut self) -> IntentResult<()> {
        match self.l2.as_mut() {
            Some(l2) => l2.save(),
            None => Ok(()),
        }
    }

    pub fn has_persistent_tier(&self) -> bool {
        self.l2.is_some()
    }
}
