//! Keyword tables.
//!
//! Single-word entries are matched against word tokens; entries containing a
//! space are matched as substrings of the cleaned text.

pub const PRIMARY_BASIC_INTERACTIONS: &str = "basic_interactions";
pub const PRIMARY_LOGISTICS: &str = "logistics";
pub const PRIMARY_RECOMMENDATION: &str = "recommendation";
pub const PRIMARY_ABOUT_PRODUCT: &str = "about_product";
pub const PRIMARY_ABOUT_COMPANY: &str = "about_company";

pub const SECONDARY_DELIVERY_ISSUE: &str = "delivery_issue";
pub const SECONDARY_REFUND_RETURN: &str = "refund_return";
pub const SECONDARY_ORDER_STATUS: &str = "order_status";

/// A message made only of these (at most four tokens) is small talk.
pub const BASIC_INTERACTION_TOKENS: &[&str] = &[
    "hi", "hello", "hey", "ok", "okay", "thanks", "thank", "thankyou", "got", "alright", "bye",
];

pub const LOGISTICS_TOKENS: &[&str] = &[
    "order",
    "delivery",
    "deliver",
    "delivered",
    "refund",
    "return",
    "cancel",
    "tracking",
    "track",
    "shipment",
    "rto",
    "courier",
    "payment",
    "failed",
    "deducted",
    "received",
];

/// Only logistics when paired with one of `DELAY_ANCHOR_TOKENS`.
pub const DELAY_TOKENS: &[&str] = &["delay", "delayed"];
pub const DELAY_ANCHOR_TOKENS: &[&str] = &["order", "delivery", "shipment"];

pub const RECOMMENDATION_PHRASES: &[&str] = &[
    "suggest",
    "recommend",
    "best for",
    "what should i use",
    "which product",
];

pub const PERSONAL_CONTEXT_PHRASES: &[&str] = &[
    "my skin",
    "my hair",
    "i have",
    "acne",
    "hair fall",
    "hairfall",
    "oily skin",
    "dry skin",
    "pigmentation",
];

pub const ABOUT_PRODUCT_PHRASES: &[&str] = &[
    "ingredients",
    "how to use",
    "usage",
    "apply",
    "price",
    "cost",
    "benefits",
    "safe",
    "side effects",
    "certified",
    "effective",
    "compare",
];

pub const ABOUT_COMPANY_PHRASES: &[&str] = &[
    "contact",
    "phone",
    "email",
    "team",
    "company",
    "customer care",
    "support",
];

pub const DELIVERY_ISSUE_PHRASES: &[&str] = &[
    "not received",
    "marked delivered",
    "delivered but not received",
    "rto",
    "returned to origin",
    "courier issue",
];

pub const REFUND_RETURN_PHRASES: &[&str] = &[
    "refund",
    "return",
    "cancel",
    "money back",
    "damaged",
    "wrong product",
    "exchange",
];

pub const ORDER_STATUS_PHRASES: &[&str] = &[
    "track", "tracking", "status", "eta", "when", "dispatch", "shipped", "delay", "delayed",
];
