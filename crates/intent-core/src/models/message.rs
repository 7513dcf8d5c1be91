use serde::{Deserialize, Serialize};

use super::Embedding;

/// A customer message as it arrives from the log export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(alias = "current_human_message")]
    pub text: String,
    /// Earlier conversation turns, `" - "` separated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
}

/// A message with coarse intent labels attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedMessage {
    pub message_id: String,
    pub text: String,
    pub primary_intent: String,
    pub secondary_intent: String,
}

/// A tagged message with its embedding; the orchestrator's input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedMessage {
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub primary_intent: String,
    pub secondary_intent: String,
    pub embedding: Embedding,
}
