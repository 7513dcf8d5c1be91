use std::fmt;

use serde::{Deserialize, Serialize};

/// Taxonomy-maintenance action for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Keep,
    Split,
    Merge,
    MissingIntent,
    NoActionFlag,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Keep,
        Action::Split,
        Action::Merge,
        Action::MissingIntent,
        Action::NoActionFlag,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Keep => "KEEP",
            Action::Split => "SPLIT",
            Action::Merge => "MERGE",
            Action::MissingIntent => "MISSING_INTENT",
            Action::NoActionFlag => "NO_ACTION_FLAG",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionConfidence {
    High,
    Medium,
    Low,
}

/// Machine-readable reason carried in every justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JustificationReason {
    TooFewMessages,
    FlagButNoClearPattern,
    CohesivePatternInFlag,
    SingleDominantCluster,
    CohesiveSubclusterDetected,
    HighInterClusterSimilarity,
    AmbiguousOrNoisy,
}

/// Supporting evidence for a decision.
///
/// Serialized as a flat mapping; absent evidence is omitted. Never names a
/// sibling bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Justification {
    pub reason: JustificationReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohesion: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inter_cluster_similarity: Option<f64>,
}

impl Justification {
    pub fn reason(reason: JustificationReason) -> Self {
        Self {
            reason,
            cluster_id: None,
            cluster_size: None,
            cohesion: None,
            coverage: None,
            inter_cluster_similarity: None,
        }
    }
}

/// Terminal outcome for one bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub action: Action,
    pub confidence: DecisionConfidence,
    pub justification: Justification,
}
