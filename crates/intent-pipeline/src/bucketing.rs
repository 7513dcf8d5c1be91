use std::collections::HashMap;

use intent_core::models::{Bucket, BucketMessage, EmbeddedMessage};

/// Group messages by exact `(primary_intent, secondary_intent)`.
///
/// Buckets come out in order of first appearance; messages keep their
/// input order within a bucket.
pub fn bucket_messages(messages: Vec<EmbeddedMessage>) -> Vec<Bucket> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();

    for msg in messages {
        let key = (msg.primary_intent, msg.secondary_intent);
        let slot = match index.get(&key) {
            Some(&i) => i,
            None => {
                buckets.push(Bucket::new(key.0.clone(), key.1.clone(), Vec::new()));
                index.insert(key, buckets.len() - 1);
                buckets.len() - 1
            }
        };
        buckets[slot].messages.push(BucketMessage {
            message_id: msg.message_id,
            embedding: msg.embedding,
        });
    }

    buckets
}
