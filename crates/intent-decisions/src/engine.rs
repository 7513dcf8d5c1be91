//! DecisionEngine: runs the rule chain against one bucket's metrics.

use intent_core::config::DecisionThresholds;
use intent_core::models::{BucketMetrics, Decision, JustificationReason};
use tracing::debug;

use crate::outcomes;
use crate::rules::{self, RuleName};

/// A decision together with the rule that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionEvaluation {
    pub rule: RuleName,
    pub decision: Decision,
}

/// Engine bound to one immutable threshold set.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    thresholds: DecisionThresholds,
}

impl DecisionEngine {
    pub fn new(thresholds: DecisionThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &DecisionThresholds {
        &self.thresholds
    }

    /// Evaluate the chain and report which rule fired.
    pub fn evaluate(&self, metrics: &BucketMetrics) -> DecisionEvaluation {
        let (rule, decision) = rules::all_rules()
            .iter()
            .find_map(|r| (r.evaluate)(metrics, &self.thresholds).map(|d| (r.name, d)))
            .unwrap_or_else(|| {
                (
                    RuleName::Default,
                    outcomes::no_action(JustificationReason::AmbiguousOrNoisy),
                )
            });

        debug!(
            primary = %metrics.primary_intent,
            secondary = %metrics.secondary_intent,
            rule = %rule,
            action = %decision.action,
            "decision rule fired"
        );

        DecisionEvaluation { rule, decision }
    }

    pub fn decide(&self, metrics: &BucketMetrics) -> Decision {
        self.evaluate(metrics).decision
    }
}

/// Map one bucket's metrics to exactly one decision.
///
/// Total and deterministic: the same metrics and thresholds always yield
/// the same decision.
pub fn decide_action(metrics: &BucketMetrics, thresholds: &DecisionThresholds) -> Decision {
    DecisionEngine::new(thresholds.clone()).decide(metrics)
}
