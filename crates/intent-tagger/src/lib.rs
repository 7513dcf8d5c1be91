//! # intent-tagger
//!
//! Assigns a `(primary_intent, secondary_intent)` pair to each message from
//! keyword signals in the message and the customer's last turns.
//! Anything the keyword sets cannot place gets the `FLAG` sentinel.

pub mod detect;
pub mod keywords;
pub mod tagger;
pub mod text;

pub use detect::{detect_primary_intent, detect_secondary_intent};
pub use tagger::{tag_messages, KeywordTagger};
pub use text::{build_text_for_analysis, clean_text, extract_customer_messages};
