//! Text normalisation for tagging.

use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());
static RE_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\w+").ok());

const TURN_SEPARATOR: &str = " - ";
const CUSTOMER_PREFIX: &str = "human:";

/// Lowercase, collapse whitespace runs to one space, trim.
pub fn clean_text(text: &str) -> String {
    let lower = text.to_lowercase();
    match RE_WHITESPACE.as_ref() {
        Some(re) => re.replace_all(&lower, " ").trim().to_string(),
        None => lower.split_whitespace().collect::<Vec<_>>().join(" "),
    }
}

/// Word tokens of already-cleaned text.
pub fn word_tokens(text: &str) -> Vec<&str> {
    match RE_WORD.as_ref() {
        Some(re) => re.find_iter(text).map(|m| m.as_str()).collect(),
        None => text.split_whitespace().collect(),
    }
}

/// The customer's last `max_turns` turns from a `" - "` separated history.
/// Turns not starting with `human:` are agent turns and are dropped.
pub fn extract_customer_messages(history: &str, max_turns: usize) -> Vec<String> {
    if history.is_empty() {
        return Vec::new();
    }
    let customer: Vec<String> = history
        .split(TURN_SEPARATOR)
        .map(str::trim)
        .filter_map(|turn| turn.strip_prefix(CUSTOMER_PREFIX))
        .map(|turn| turn.trim().to_string())
        .collect();
    let skip = customer.len().saturating_sub(max_turns);
    customer.into_iter().skip(skip).collect()
}

/// Last two customer turns followed by the current message, cleaned.
pub fn build_text_for_analysis(history: Option<&str>, current_message: &str) -> String {
    let mut parts = history
        .map(|h| extract_customer_messages(h, 2))
        .unwrap_or_default();
    parts.push(current_message.to_string());
    clean_text(&parts.join(" "))
}
