// Single source of truth for all default values.

// --- Clustering ---
pub const DEFAULT_MIN_MESSAGES: usize = 5;
pub const DEFAULT_MIN_CLUSTER_SIZE_FLOOR: usize = 5;
pub const DEFAULT_MIN_CLUSTER_SIZE_FRACTION: f64 = 0.1;
pub const DEFAULT_COHESION_PRECISION: u32 = 3;

// --- Decision thresholds ---
pub const DEFAULT_MIN_BUCKET_SIZE_SPLIT: usize = 20;
pub const DEFAULT_MIN_BUCKET_SIZE_MISSING: usize = 10;
pub const DEFAULT_MIN_COHESION_MISSING: f64 = 0.6;
pub const DEFAULT_DOMINANT_CLUSTER_RATIO: f64 = 0.8;
pub const DEFAULT_MIN_COHESION_KEEP: f64 = 0.7;
pub const DEFAULT_MIN_CLUSTER_RATIO: f64 = 0.3;
pub const DEFAULT_MIN_COHESION_SPLIT: f64 = 0.6;
pub const DEFAULT_MAX_INTER_CLUSTER_SIMILARITY_SPLIT: f64 = 0.4;
pub const DEFAULT_MIN_INTER_CLUSTER_SIMILARITY_MERGE: f64 = 0.9;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 64;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;

// --- Pipeline ---
pub const DEFAULT_PARALLEL: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
