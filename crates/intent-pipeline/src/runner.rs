//! Bucket orchestration: cluster, decide, collect.

use std::path::Path;

use chrono::Utc;
use intent_clustering::BucketClusterer;
use intent_core::config::{BucketErrorPolicy, IntentConfig};
use intent_core::errors::{IntentResult, PipelineError};
use intent_core::models::{Bucket, BucketResult};
use intent_decisions::DecisionEngine;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::bucketing::bucket_messages;
use crate::io::{load_messages, write_json};
use crate::summary::RunSummary;

/// Results in bucket order plus the run rollup.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub results: Vec<BucketResult>,
    pub summary: RunSummary,
}

/// Cluster one bucket and decide its action.
pub fn process_bucket(
    bucket: &Bucket,
    clusterer: &BucketClusterer,
    engine: &DecisionEngine,
) -> IntentResult<BucketResult> {
    let span = crate::bucket_span!(bucket.primary_intent, bucket.secondary_intent, bucket.len());
    let _guard = span.enter();

    let metrics = clusterer.cluster(bucket)?;
    let evaluation = engine.evaluate(&metrics);
    Ok(BucketResult::new(metrics, evaluation.decision))
}

/// Process every bucket, keeping input order.
///
/// Under `abort` the first failing bucket (in bucket order) fails the run.
/// Under `skip` failing buckets are logged and left out of the results.
pub fn run_buckets(buckets: &[Bucket], config: &IntentConfig) -> IntentResult<RunReport> {
    let mut summary = RunSummary::new(Utc::now());
    let clusterer = BucketClusterer::new(config.clustering.clone());
    let engine = DecisionEngine::new(config.decision.clone());

    let outcomes: Vec<IntentResult<BucketResult>> = if config.pipeline.parallel {
        buckets
            .par_iter()
            .map(|b| process_bucket(b, &clusterer, &engine))
            .collect()
    } else {
        buckets
            .iter()
            .map(|b| process_bucket(b, &clusterer, &engine))
            .collect()
    };

    let mut results = Vec::with_capacity(buckets.len());
    for (bucket, outcome) in buckets.iter().zip(outcomes) {
        match outcome {
            Ok(result) => {
                let clustered = bucket.len() >= clusterer.config().min_messages;
                summary.record(&result, clustered);
                results.push(result);
            }
            Err(e) => match config.pipeline.on_bucket_error {
                BucketErrorPolicy::Abort => {
                    return Err(PipelineError::BucketFailed {
                        primary_intent: bucket.primary_intent.clone(),
                        secondary_intent: bucket.secondary_intent.clone(),
                        reason: e.to_string(),
                    }
                    .into());
                }
                BucketErrorPolicy::Skip => {
                    warn!(
                        primary = %bucket.primary_intent,
                        secondary = %bucket.secondary_intent,
                        error = %e,
                        "bucket failed, skipping"
                    );
                    summary.record_failure(&bucket.primary_intent, &bucket.secondary_intent);
                }
            },
        }
    }

    summary.finish();
    summary.log();
    Ok(RunReport { results, summary })
}

/// Load embedded messages, run every bucket, write the results array.
pub fn run_pipeline(input: &Path, output: &Path, config: &IntentConfig) -> IntentResult<RunReport> {
    let messages = load_messages(input)?;
    info!(path = %input.display(), messages = messages.len(), "messages loaded");

    let buckets = bucket_messages(messages);
    let report = run_buckets(&buckets, config)?;

    write_json(output, &report.results)?;
    info!(path = %output.display(), records = report.results.len(), "results saved");
    Ok(report)
}
