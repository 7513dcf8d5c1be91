//! KeywordTagger: the built-in `IIntentTagger`.

use intent_core::models::{RawMessage, TaggedMessage};
use intent_core::traits::{IIntentTagger, IntentLabels};
use tracing::debug;

use crate::detect::{detect_primary_intent, detect_secondary_intent};
use crate::text::build_text_for_analysis;

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordTagger;

impl KeywordTagger {
    pub fn new() -> Self {
        Self
    }
}

impl IIntentTagger for KeywordTagger {
    fn tag(&self, history: Option<&str>, message: &str) -> IntentLabels {
        let text = build_text_for_analysis(history, message);
        let primary = detect_primary_intent(&text);
        let secondary = detect_secondary_intent(primary, &text);
        IntentLabels {
            primary_intent: primary.to_string(),
            secondary_intent: secondary.to_string(),
        }
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

/// Tag every raw message. Messages without an id get `msg_{position + 1}`.
pub fn tag_messages(tagger: &dyn IIntentTagger, messages: &[RawMessage]) -> Vec<TaggedMessage> {
    let tagged: Vec<TaggedMessage> = messages
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            let labels = tagger.tag(raw.history.as_deref(), &raw.text);
            TaggedMessage {
                message_id: raw
                    .message_id
                    .clone()
                    .unwrap_or_else(|| format!("msg_{}", i + 1)),
                text: raw.text.clone(),
                primary_intent: labels.primary_intent,
                secondary_intent: labels.secondary_intent,
            }
        })
        .collect();

    debug!(tagger = tagger.name(), count = tagged.len(), "messages tagged");
    tagged
}
