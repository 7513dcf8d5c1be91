//! # intent-decisions
//!
//! Decision rule engine: an ordered chain of rules evaluated against one
//! bucket's metrics, first match wins.
//! Order: no-data guard → FLAG/missing intent → keep → split → merge → default.

pub mod engine;
pub mod outcomes;
pub mod rules;

pub use engine::{decide_action, DecisionEngine, DecisionEvaluation};
pub use rules::{all_rules, DecisionRule, RuleName};
