//! Per-run rollup surfaced through logging.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use intent_core::models::{Action, BucketResult};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub bucket_count: usize,
    pub message_count: usize,
    pub action_counts: BTreeMap<Action, usize>,
    /// Buckets that were too small to cluster.
    pub skipped_buckets: usize,
    /// `primary/secondary` keys of buckets dropped under the skip policy.
    pub failed_buckets: Vec<String>,
}

impl RunSummary {
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            finished_at: started_at,
            bucket_count: 0,
            message_count: 0,
            action_counts: BTreeMap::new(),
            skipped_buckets: 0,
            failed_buckets: Vec::new(),
        }
    }

    pub fn record(&mut self, result: &BucketResult, clustered: bool) {
        self.bucket_count += 1;
        self.message_count += result.metrics.message_count;
        *self.action_counts.entry(result.decision.action).or_default() += 1;
        if !clustered {
            self.skipped_buckets += 1;
        }
    }

    pub fn record_failure(&mut self, primary_intent: &str, secondary_intent: &str) {
        self.failed_buckets
            .push(format!("{primary_intent}/{secondary_intent}"));
    }

    pub fn count(&self, action: Action) -> usize {
        self.action_counts.get(&action).copied().unwrap_or(0)
    }

    pub fn finish(&mut self) {
        self.finished_at = Utc::now();
    }

    pub fn log(&self) {
        info!(
            buckets = self.bucket_count,
            messages = self.message_count,
            keep = self.count(Action::Keep),
            split = self.count(Action::Split),
            merge = self.count(Action::Merge),
            missing_intent = self.count(Action::MissingIntent),
            no_action = self.count(Action::NoActionFlag),
            skipped = self.skipped_buckets,
            failed = self.failed_buckets.len(),
            elapsed_ms = (self.finished_at - self.started_at).num_milliseconds(),
            "pipeline run complete"
        );
    }
}
