//! Fail-fast checks on a bucket before any numeric work.

use intent_core::errors::ClusteringError;
use intent_core::models::Bucket;

/// Validate labels, non-emptiness, and embedding shape.
///
/// Returns the shared dimensionality on success.
pub fn validate_bucket(bucket: &Bucket) -> Result<usize, ClusteringError> {
    if bucket.primary_intent.is_empty() {
        return Err(missing("primary_intent"));
    }
    if bucket.secondary_intent.is_empty() {
        return Err(missing("secondary_intent"));
    }

    let first = bucket
        .messages
        .first()
        .ok_or_else(|| ClusteringError::EmptyBucket {
            primary_intent: bucket.primary_intent.clone(),
            secondary_intent: bucket.secondary_intent.clone(),
        })?;

    let expected = first.embedding.len();
    if expected == 0 {
        return Err(ClusteringError::EmptyEmbedding {
            message_id: first.message_id.clone(),
        });
    }

    for msg in &bucket.messages {
        if msg.message_id.is_empty() {
            return Err(missing("message_id"));
        }
        if msg.embedding.len() != expected {
            return Err(ClusteringError::DimensionMismatch {
                message_id: msg.message_id.clone(),
                expected,
                actual: msg.embedding.len(),
            });
        }
        if msg.embedding.iter().any(|v| !v.is_finite()) {
            return Err(ClusteringError::NonFiniteEmbedding {
                message_id: msg.message_id.clone(),
            });
        }
    }

    Ok(expected)
}

fn missing(field: &str) -> ClusteringError {
    ClusteringError::MissingField {
        field: field.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use intent_core::models::BucketMessage;

    use super::*;

    fn msg(id: &str, embedding: Vec<f32>) -> BucketMessage {
        BucketMessage {
            message_id: id.to_string(),
            embedding,
        }
    }

    #[test]
    fn valid_bucket_reports_dimensions() {
        let b = Bucket::new("a", "b", vec![msg("1", vec![1.0, 2.0]), msg("2", vec![3.0, 4.0])]);
        assert_eq!(validate_bucket(&b).unwrap(), 2);
    }

    #[test]
    fn empty_bucket_is_rejected() {
        let b = Bucket::new("a", "b", vec![]);
        assert!(matches!(
            validate_bucket(&b),
            Err(ClusteringError::EmptyBucket { .. })
        ));
    }

    #[test]
    fn missing_label_is_rejected() {
        let b = Bucket::new("", "b", vec![msg("1", vec![1.0])]);
        match validate_bucket(&b) {
            Err(ClusteringError::MissingField { field }) => assert_eq!(field, "primary_intent"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn inconsistent_dimensions_name_the_offender() {
        let b = Bucket::new(
            "a",
            "b",
            vec![msg("1", vec![1.0, 2.0]), msg("2", vec![1.0, 2.0, 3.0])],
        );
        match validate_bucket(&b) {
            Err(ClusteringError::DimensionMismatch {
                message_id,
                expected,
                actual,
            }) => {
                assert_eq!(message_id, "2");
                assert_eq!(expected, 2);
                assert_eq!(actual, 3);
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn zero_dimension_embedding_is_rejected() {
        let b = Bucket::new("a", "b", vec![msg("1", vec![])]);
        assert!(matches!(
            validate_bucket(&b),
            Err(ClusteringError::EmptyEmbedding { .. })
        ));
    }

    #[test]
    fn nan_coordinate_is_rejected() {
        let b = Bucket::new("a", "b", vec![msg("1", vec![1.0, f32::NAN])]);
        assert!(matches!(
            validate_bucket(&b),
            Err(ClusteringError::NonFiniteEmbedding { .. })
        ));
    }
}
