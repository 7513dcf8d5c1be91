use intent_core::models::RawMessage;
use intent_core::traits::IIntentTagger;
use intent_tagger::{tag_messages, KeywordTagger};

fn labels(message: &str) -> (String, String) {
    let l = KeywordTagger::new().tag(None, message);
    (l.primary_intent, l.secondary_intent)
}

fn pair(p: &str, s: &str) -> (String, String) {
    (p.to_string(), s.to_string())
}

#[test]
fn sample_phrases_are_tagged() {
    assert_eq!(labels("Hi"), pair("basic_interactions", "FLAG"));
    assert_eq!(labels("Ok thanks"), pair("basic_interactions", "FLAG"));
    assert_eq!(labels("How to track my order"), pair("logistics", "order_status"));
    assert_eq!(labels("Refund ka status batao"), pair("logistics", "refund_return"));
    assert_eq!(labels("My order is delayed"), pair("logistics", "order_status"));
    assert_eq!(
        labels("Marked delivered but not received"),
        pair("logistics", "delivery_issue")
    );
    assert_eq!(
        labels("Suggest something for hair growth"),
        pair("recommendation", "FLAG")
    );
    assert_eq!(labels("How to use ABC face wash"), pair("about_product", "FLAG"));
    assert_eq!(labels("Contact number?"), pair("about_company", "FLAG"));
}

#[test]
fn unknown_text_is_flagged() {
    assert_eq!(labels("asdf qwerty"), pair("FLAG", "FLAG"));
    assert_eq!(labels(""), pair("FLAG", "FLAG"));
}

#[test]
fn logistics_without_secondary_signal_is_flagged() {
    assert_eq!(labels("payment deducted twice"), pair("logistics", "FLAG"));
}

#[test]
fn history_contributes_customer_turns_only() {
    let tagger = KeywordTagger::new();
    let with_history = tagger.tag(Some("human: I want a refund - bot: contact support"), "ok");
    assert_eq!(with_history.primary_intent, "logistics");
    assert_eq!(with_history.secondary_intent, "refund_return");

    let agent_only = tagger.tag(Some("bot: track your order here"), "hi");
    assert_eq!(agent_only.primary_intent, "basic_interactions");
}

#[test]
fn tag_messages_assigns_missing_ids_by_position() {
    let raw: Vec<RawMessage> = serde_json::from_str(
        r#"[
            {"current_human_message": "Hi"},
            {"message_id": "abc", "text": "where is my order"},
            {"text": "price?"}
        ]"#,
    )
    .unwrap();
    let tagged = tag_messages(&KeywordTagger::new(), &raw);
    let ids: Vec<&str> = tagged.iter().map(|t| t.message_id.as_str()).collect();
    assert_eq!(ids, vec!["msg_1", "abc", "msg_3"]);
    assert_eq!(tagged[1].primary_intent, "logistics");
    assert_eq!(tagged[2].primary_intent, "about_product");
    assert_eq!(tagged[0].text, "Hi");
}

mod properties {
    use intent_core::traits::IIntentTagger;
    use intent_tagger::KeywordTagger;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_only_logistics_has_secondary(message in "[a-zA-Z ?!]{0,60}") {
            let labels = KeywordTagger::new().tag(None, &message);
            if labels.primary_intent != "logistics" {
                prop_assert_eq!(labels.secondary_intent, "FLAG");
            }
        }

        #[test]
        fn prop_tagging_ignores_case_and_spacing(message in "[a-z ]{0,40}") {
            let tagger = KeywordTagger::new();
            let noisy = format!("  {}  ", message.to_uppercase());
            prop_assert_eq!(tagger.tag(None, &message), tagger.tag(None, &noisy));
        }
    }
}
