//! # intent-pipeline
//!
//! Wires tagging, embedding, clustering and decisions together.
//! Loads embedded messages, groups them into buckets, clusters and decides
//! per bucket, and persists one record per bucket.

pub mod bucketing;
pub mod cli;
pub mod io;
pub mod runner;
pub mod summary;
pub mod tracing_setup;

pub use bucketing::bucket_messages;
pub use io::{load_messages, read_json, write_json};
pub use runner::{process_bucket, run_buckets, run_pipeline, RunReport};
pub use summary::RunSummary;
pub use tracing_setup::init_tracing;
