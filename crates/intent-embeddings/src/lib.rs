//! # intent-embeddings
//!
//! Turns tagged messages into embedded messages.
//! Text is preprocessed, looked up in a two-tier cache (moka in memory,
//! JSON file on disk), and only misses reach the provider, in batches.

pub mod cache;
pub mod engine;
pub mod preprocess;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use preprocess::{content_hash, preprocess};
pub use providers::{create_provider, HashedTfProvider};
