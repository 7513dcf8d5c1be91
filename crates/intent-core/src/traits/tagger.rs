/// Coarse labels assigned to one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentLabels {
    pub primary_intent: String,
    pub secondary_intent: String,
}

/// Coarse intent tagger. Unclassifiable input gets the `FLAG` sentinel.
pub trait IIntentTagger: Send + Sync {
    /// Tag the current message given the optional conversation history.
    fn tag(&self, history: Option<&str>, message: &str) -> IntentLabels;

    fn name(&self) -> &str;
}
