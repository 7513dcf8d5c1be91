//! The ordered decision rules.
//!
//! Each rule either claims the bucket by returning a decision or passes.
//! `all_rules` fixes the evaluation order; the last rule always matches.

use std::fmt;

use intent_core::config::DecisionThresholds;
use intent_core::models::{BucketMetrics, Decision, JustificationReason};

use crate::outcomes;

/// Identifies a rule in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleName {
    NoDataGuard,
    FlagMissingIntent,
    Keep,
    Split,
    Merge,
    Default,
}

impl RuleName {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleName::NoDataGuard => "no_data_guard",
            RuleName::FlagMissingIntent => "flag_missing_intent",
            RuleName::Keep => "keep",
            RuleName::Split => "split",
            RuleName::Merge => "merge",
            RuleName::Default => "default",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named rule: returns `Some` when it claims the bucket.
#[derive(Clone, Copy)]
pub struct DecisionRule {
    pub name: RuleName,
    pub evaluate: fn(&BucketMetrics, &DecisionThresholds) -> Option<Decision>,
}

impl fmt::Debug for DecisionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionRule")
            .field("name", &self.name)
            .finish()
    }
}

/// All rules in priority order.
pub fn all_rules() -> [DecisionRule; 6] {
    [
        DecisionRule {
            name: RuleName::NoDataGuard,
            evaluate: no_data_guard,
        },
        DecisionRule {
            name: RuleName::FlagMissingIntent,
            evaluate: flag_missing_intent,
        },
        DecisionRule {
            name: RuleName::Keep,
            evaluate: keep_dominant,
        },
        DecisionRule {
            name: RuleName::Split,
            evaluate: split_subcluster,
        },
        DecisionRule {
            name: RuleName::Merge,
            evaluate: merge_similar,
        },
        DecisionRule {
            name: RuleName::Default,
            evaluate: default_no_action,
        },
    ]
}

/// Too few messages for any structural call.
pub fn no_data_guard(metrics: &BucketMetrics, t: &DecisionThresholds) -> Option<Decision> {
    (metrics.message_count < t.min_bucket_size_split)
        .then(|| outcomes::no_action(JustificationReason::TooFewMessages))
}

/// Flagged buckets never reach keep/split/merge: either the first cohesive,
/// large-enough cluster is a missing intent, or nothing is.
pub fn flag_missing_intent(metrics: &BucketMetrics, t: &DecisionThresholds) -> Option<Decision> {
    if !metrics.is_flagged() {
        return None;
    }
    let decision = metrics
        .clusters
        .iter()
        .find(|c| c.size >= t.min_bucket_size_missing && c.cohesion >= t.min_cohesion_missing)
        .map(outcomes::missing_intent)
        .unwrap_or_else(|| outcomes::no_action(JustificationReason::FlagButNoClearPattern));
    Some(decision)
}

/// Largest cluster (first on ties) dominates and is cohesive.
pub fn keep_dominant(metrics: &BucketMetrics, t: &DecisionThresholds) -> Option<Decision> {
    let dominant = metrics.dominant_cluster()?;
    let coverage = metrics.coverage(dominant);
    (coverage >= t.dominant_cluster_ratio && dominant.cohesion >= t.min_cohesion_keep)
        .then(|| outcomes::keep(dominant, coverage))
}

/// First cluster that is large and cohesive, in a bucket whose clusters
/// are mutually dissimilar.
pub fn split_subcluster(metrics: &BucketMetrics, t: &DecisionThresholds) -> Option<Decision> {
    if metrics.inter_cluster_similarity > t.max_inter_cluster_similarity_split {
        return None;
    }
    metrics
        .clusters
        .iter()
        .find(|c| metrics.coverage(c) >= t.min_cluster_ratio && c.cohesion >= t.min_cohesion_split)
        .map(|c| outcomes::split(c, metrics.coverage(c), metrics.inter_cluster_similarity))
}

/// Clusters that look alike. An empty cluster list carries only the
/// vacuous 1.0 similarity and never merges.
pub fn merge_similar(metrics: &BucketMetrics, t: &DecisionThresholds) -> Option<Decision> {
    if metrics.clusters.is_empty() {
        return None;
    }
    (metrics.inter_cluster_similarity >= t.min_inter_cluster_similarity_merge)
        .then(|| outcomes::merge(metrics.inter_cluster_similarity))
}

pub fn default_no_action(_: &BucketMetrics, _: &DecisionThresholds) -> Option<Decision> {
    Some(outcomes::no_action(JustificationReason::AmbiguousOrNoisy))
}

#[cfg(test)]
mod tests {
    use intent_core::models::{Action, Cluster};

    use super::*;

    fn metrics(secondary: &str, count: usize, clusters: &[(usize, f64)], inter: f64) -> BucketMetrics {
        BucketMetrics {
            primary_intent: "logistics".into(),
            secondary_intent: secondary.into(),
            message_count: count,
            clusters: clusters
                .iter()
                .enumerate()
                .map(|(i, &(size, cohesion))| Cluster {
                    cluster_id: i as i32,
                    size,
                    cohesion,
                })
                .collect(),
            inter_cluster_similarity: inter,
            noise_ratio: 0.0,
            reason: None,
        }
    }

    #[test]
    fn rules_are_in_priority_order() {
        let names: Vec<RuleName> = all_rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                RuleName::NoDataGuard,
                RuleName::FlagMissingIntent,
                RuleName::Keep,
                RuleName::Split,
                RuleName::Merge,
                RuleName::Default,
            ]
        );
    }

    #[test]
    fn no_data_guard_boundary() {
        let t = DecisionThresholds::default();
        assert!(no_data_guard(&metrics("x", 19, &[], 1.0), &t).is_some());
        assert!(no_data_guard(&metrics("x", 20, &[], 1.0), &t).is_none());
    }

    #[test]
    fn flag_rule_ignores_unflagged_buckets() {
        let t = DecisionThresholds::default();
        assert!(flag_missing_intent(&metrics("order_status", 40, &[(30, 0.9)], 1.0), &t).is_none());
    }

    #[test]
    fn flag_rule_claims_flagged_bucket_without_pattern() {
        let t = DecisionThresholds::default();
        let d = flag_missing_intent(&metrics("FLAG", 40, &[(9, 0.9), (30, 0.5)], 0.2), &t).unwrap();
        assert_eq!(d.action, Action::NoActionFlag);
        assert_eq!(d.justification.reason, JustificationReason::FlagButNoClearPattern);
    }

    #[test]
    fn flag_rule_thresholds_are_inclusive() {
        let t = DecisionThresholds::default();
        let d = flag_missing_intent(&metrics("FLAG", 40, &[(10, 0.6)], 1.0), &t).unwrap();
        assert_eq!(d.action, Action::MissingIntent);
    }

    #[test]
    fn keep_passes_on_empty_clusters() {
        let t = DecisionThresholds::default();
        assert!(keep_dominant(&metrics("x", 50, &[], 1.0), &t).is_none());
    }

    #[test]
    fn keep_requires_both_coverage_and_cohesion() {
        let t = DecisionThresholds::default();
        assert!(keep_dominant(&metrics("x", 50, &[(40, 0.69)], 1.0), &t).is_none());
        assert!(keep_dominant(&metrics("x", 50, &[(39, 0.95)], 1.0), &t).is_none());
        assert!(keep_dominant(&metrics("x", 50, &[(40, 0.7)], 1.0), &t).is_some());
    }

    #[test]
    fn keep_judges_first_of_tied_largest() {
        let t = DecisionThresholds {
            dominant_cluster_ratio: 0.4,
            ..Default::default()
        };
        // Both clusters cover 45%; only the first is evaluated, and it is loose.
        let m = metrics("x", 100, &[(45, 0.5), (45, 0.95)], 0.2);
        assert!(keep_dominant(&m, &t).is_none());
    }

    #[test]
    fn split_blocked_by_high_inter_cluster_similarity() {
        let t = DecisionThresholds::default();
        assert!(split_subcluster(&metrics("x", 100, &[(45, 0.8), (45, 0.8)], 0.41), &t).is_none());
        assert!(split_subcluster(&metrics("x", 100, &[(45, 0.8), (45, 0.8)], 0.4), &t).is_some());
    }

    #[test]
    fn split_skips_unqualified_clusters_in_order() {
        let t = DecisionThresholds::default();
        let m = metrics("x", 100, &[(10, 0.9), (35, 0.5), (40, 0.7)], 0.1);
        let d = split_subcluster(&m, &t).unwrap();
        assert_eq!(d.justification.cluster_id, Some(2));
        assert_eq!(d.justification.cluster_size, Some(40));
    }

    #[test]
    fn merge_never_fires_on_empty_clusters() {
        let t = DecisionThresholds::default();
        assert!(merge_similar(&metrics("x", 50, &[], 1.0), &t).is_none());
    }

    #[test]
    fn merge_fires_at_threshold() {
        let t = DecisionThresholds::default();
        let d = merge_similar(&metrics("x", 50, &[(10, 0.2), (10, 0.2)], 0.9), &t).unwrap();
        assert_eq!(d.action, Action::Merge);
        assert_eq!(d.justification.inter_cluster_similarity, Some(0.9));
        assert!(d.justification.cluster_id.is_none());
    }

    #[test]
    fn default_always_matches() {
        let t = DecisionThresholds::default();
        let d = default_no_action(&metrics("x", 0, &[], 1.0), &t).unwrap();
        assert_eq!(d.justification.reason, JustificationReason::AmbiguousOrNoisy);
    }
}
