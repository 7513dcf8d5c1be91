use serde::{Deserialize, Serialize};

use crate::constants::FLAG_SENTINEL;

/// Fixed-dimension embedding vector.
pub type Embedding = Vec<f32>;

/// One message inside a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketMessage {
    pub message_id: String,
    pub embedding: Embedding,
}

/// Messages sharing one `(primary_intent, secondary_intent)` label pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub primary_intent: String,
    pub secondary_intent: String,
    pub messages: Vec<BucketMessage>,
}

impl Bucket {
    pub fn new(
        primary_intent: impl Into<String>,
        secondary_intent: impl Into<String>,
        messages: Vec<BucketMessage>,
    ) -> Self {
        Self {
            primary_intent: primary_intent.into(),
            secondary_intent: secondary_intent.into(),
            messages,
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Whether upstream tagging could not classify this bucket.
    pub fn is_flagged(&self) -> bool {
        self.secondary_intent == FLAG_SENTINEL
    }
}
