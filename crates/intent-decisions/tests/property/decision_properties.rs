//! Property tests for the decision rule engine.

use proptest::prelude::*;

use intent_core::config::DecisionThresholds;
use intent_core::models::{Action, BucketMetrics, Cluster, DecisionConfidence};
use intent_decisions::{decide_action, DecisionEngine, RuleName};

fn metrics_strategy() -> impl Strategy<Value = BucketMetrics> {
    (
        0usize..200,
        prop::bool::ANY,
        prop::collection::vec((1usize..80, -1.0f64..=1.0), 0..6),
        -1.0f64..=1.0,
    )
        .prop_map(|(count, flagged, raw, inter)| {
            let clusters: Vec<Cluster> = raw
                .into_iter()
                .enumerate()
                .map(|(i, (size, cohesion))| Cluster {
                    cluster_id: i as i32,
                    size,
                    cohesion,
                })
                .collect();
            let inter = if clusters.len() < 2 { 1.0 } else { inter };
            BucketMetrics {
                primary_intent: "p".into(),
                secondary_intent: if flagged { "FLAG".into() } else { "s".into() },
                message_count: count,
                noise_ratio: if clusters.is_empty() { 1.0 } else { 0.0 },
                clusters,
                inter_cluster_similarity: inter,
                reason: None,
            }
        })
}

proptest! {
    #[test]
    fn prop_decision_is_deterministic(m in metrics_strategy()) {
        let t = DecisionThresholds::default();
        prop_assert_eq!(decide_action(&m, &t), decide_action(&m, &t));
    }

    #[test]
    fn prop_confidence_follows_action(m in metrics_strategy()) {
        let d = decide_action(&m, &DecisionThresholds::default());
        let expected = match d.action {
            Action::Keep | Action::Split | Action::MissingIntent => DecisionConfidence::High,
            Action::Merge => DecisionConfidence::Medium,
            Action::NoActionFlag => DecisionConfidence::Low,
        };
        prop_assert_eq!(d.confidence, expected);
    }

    #[test]
    fn prop_flagged_buckets_only_get_flag_outcomes(m in metrics_strategy()) {
        let eval = DecisionEngine::default().evaluate(&m);
        if m.is_flagged() {
            prop_assert!(matches!(eval.rule, RuleName::NoDataGuard | RuleName::FlagMissingIntent));
            prop_assert!(matches!(eval.decision.action, Action::MissingIntent | Action::NoActionFlag));
        } else {
            prop_assert_ne!(eval.decision.action, Action::MissingIntent);
        }
    }

    #[test]
    fn prop_empty_clusters_never_change_taxonomy(m in metrics_strategy()) {
        let mut m = m;
        m.clusters.clear();
        m.inter_cluster_similarity = 1.0;
        let d = decide_action(&m, &DecisionThresholds::default());
        prop_assert_eq!(d.action, Action::NoActionFlag);
    }

    #[test]
    fn prop_small_buckets_are_guarded(m in metrics_strategy(), count in 0usize..20) {
        let t = DecisionThresholds::default();
        let mut m = m;
        m.message_count = count;
        let eval = DecisionEngine::new(t).evaluate(&m);
        prop_assert_eq!(eval.rule, RuleName::NoDataGuard);
    }
}
