//! Primary and secondary intent detection over cleaned text.

use intent_core::constants::FLAG_SENTINEL;

use crate::keywords::*;
use crate::text::word_tokens;

fn any_token(tokens: &[&str], set: &[&str]) -> bool {
    tokens.iter().any(|t| set.contains(t))
}

fn any_phrase(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

fn is_basic_interaction(tokens: &[&str]) -> bool {
    !tokens.is_empty()
        && tokens.len() <= 4
        && tokens.iter().all(|t| BASIC_INTERACTION_TOKENS.contains(t))
}

fn is_logistics(tokens: &[&str]) -> bool {
    any_token(tokens, LOGISTICS_TOKENS)
        || (any_token(tokens, DELAY_TOKENS) && any_token(tokens, DELAY_ANCHOR_TOKENS))
}

fn is_recommendation(text: &str) -> bool {
    any_phrase(text, RECOMMENDATION_PHRASES) || any_phrase(text, PERSONAL_CONTEXT_PHRASES)
}

/// First matching check wins: small talk, logistics, recommendation,
/// product questions, company questions. Otherwise `FLAG`.
pub fn detect_primary_intent(text: &str) -> &'static str {
    let tokens = word_tokens(text);
    if is_basic_interaction(&tokens) {
        PRIMARY_BASIC_INTERACTIONS
    } else if is_logistics(&tokens) {
        PRIMARY_LOGISTICS
    } else if is_recommendation(text) {
        PRIMARY_RECOMMENDATION
    } else if any_phrase(text, ABOUT_PRODUCT_PHRASES) {
        PRIMARY_ABOUT_PRODUCT
    } else if any_phrase(text, ABOUT_COMPANY_PHRASES) {
        PRIMARY_ABOUT_COMPANY
    } else {
        FLAG_SENTINEL
    }
}

/// Only logistics has a secondary taxonomy; everything else is `FLAG`.
pub fn detect_secondary_intent(primary: &str, text: &str) -> &'static str {
    if primary != PRIMARY_LOGISTICS {
        return FLAG_SENTINEL;
    }
    if any_phrase(text, DELIVERY_ISSUE_PHRASES) {
        SECONDARY_DELIVERY_ISSUE
    } else if any_phrase(text, REFUND_RETURN_PHRASES) {
        SECONDARY_REFUND_RETURN
    } else if any_phrase(text, ORDER_STATUS_PHRASES) {
        SECONDARY_ORDER_STATUS
    } else {
        FLAG_SENTINEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_tokens_of_small_talk_is_not_basic() {
        assert_eq!(detect_primary_intent("hi hello hey ok"), PRIMARY_BASIC_INTERACTIONS);
        assert_eq!(detect_primary_intent("hi hello hey ok bye"), FLAG_SENTINEL);
    }

    #[test]
    fn delay_needs_an_anchor() {
        assert_eq!(detect_primary_intent("sorry for the delay"), FLAG_SENTINEL);
        assert_eq!(detect_primary_intent("shipment delayed again"), PRIMARY_LOGISTICS);
    }

    #[test]
    fn logistics_tokens_are_whole_words() {
        // "reorder" is not "order"
        assert_eq!(detect_primary_intent("can i reorder"), FLAG_SENTINEL);
    }

    #[test]
    fn non_logistics_secondary_is_flag() {
        assert_eq!(detect_secondary_intent(PRIMARY_RECOMMENDATION, "track"), FLAG_SENTINEL);
    }

    #[test]
    fn delivery_issue_outranks_refund() {
        assert_eq!(
            detect_secondary_intent(PRIMARY_LOGISTICS, "rto happened, need refund"),
            SECONDARY_DELIVERY_ISSUE
        );
    }
}
