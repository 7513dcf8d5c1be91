//! Decision constructors, one per outcome.

use intent_core::models::{
    Action, Cluster, Decision, DecisionConfidence, Justification, JustificationReason,
};

pub fn keep(cluster: &Cluster, coverage: f64) -> Decision {
    Decision {
        action: Action::Keep,
        confidence: DecisionConfidence::High,
        justification: Justification {
            cluster_id: Some(cluster.cluster_id),
            cluster_size: Some(cluster.size),
            cohesion: Some(cluster.cohesion),
            coverage: Some(coverage),
            ..Justification::reason(JustificationReason::SingleDominantCluster)
        },
    }
}

pub fn split(cluster: &Cluster, coverage: f64, inter_cluster_similarity: f64) -> Decision {
    Decision {
        action: Action::Split,
        confidence: DecisionConfidence::High,
        justification: Justification {
            cluster_id: Some(cluster.cluster_id),
            cluster_size: Some(cluster.size),
            cohesion: Some(cluster.cohesion),
            coverage: Some(coverage),
            inter_cluster_similarity: Some(inter_cluster_similarity),
            ..Justification::reason(JustificationReason::CohesiveSubclusterDetected)
        },
    }
}

pub fn missing_intent(cluster: &Cluster) -> Decision {
    Decision {
        action: Action::MissingIntent,
        confidence: DecisionConfidence::High,
        justification: Justification {
            cluster_id: Some(cluster.cluster_id),
            cluster_size: Some(cluster.size),
            cohesion: Some(cluster.cohesion),
            ..Justification::reason(JustificationReason::CohesivePatternInFlag)
        },
    }
}

/// Names no sibling bucket: finding the merge target happens downstream.
pub fn merge(inter_cluster_similarity: f64) -> Decision {
    Decision {
        action: Action::Merge,
        confidence: DecisionConfidence::Medium,
        justification: Justification {
            inter_cluster_similarity: Some(inter_cluster_similarity),
            ..Justification::reason(JustificationReason::HighInterClusterSimilarity)
        },
    }
}

pub fn no_action(reason: JustificationReason) -> Decision {
    Decision {
        action: Action::NoActionFlag,
        confidence: DecisionConfidence::Low,
        justification: Justification::reason(reason),
    }
}
