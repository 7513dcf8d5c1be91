//! L1 in-memory cache using moka.

use moka::sync::Cache;

/// Keys are blake3 hashes of preprocessed text.
pub struct L1MemoryCache {
    cache: Cache<String, Vec<f32>>,
}

impl L1MemoryCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
