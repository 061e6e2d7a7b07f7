//! Core types for the shopping conversation pipeline.
//!
//! Defines transcript messages, the per-request conversation context, and the
//! category / intent / entity vocabulary produced by classification.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Transcript
// =============================================================================

/// Who authored a transcript message.
///
/// Missing or unrecognised roles become `Other`, which no rule treats as an
/// assistant turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    #[default]
    #[serde(other)]
    Other,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
            Role::System => write!(f, "system"),
            Role::Other => write!(f, "other"),
        }
    }
}

/// A single transcript entry as submitted by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// =============================================================================
// Conversation context
// =============================================================================

/// Coarse state of the conversation as seen from the transcript tail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationType {
    #[default]
    General,
    ProductSearch,
}

impl fmt::Display for ConversationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationType::General => write!(f, "general"),
            ConversationType::ProductSearch => write!(f, "product_search"),
        }
    }
}

/// What the previous turns tell us about products already shown.
///
/// `last_products` is non-empty only when `has_products` is set, and
/// `conversation_type` is `ProductSearch` exactly when `has_products` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationContext {
    pub has_products: bool,
    /// Query echoed in the last product listing, or empty.
    pub last_product_query: String,
    /// Product names from the last listing, in display order.
    pub last_products: Vec<String>,
    pub conversation_type: ConversationType,
}

// =============================================================================
// Classification
// =============================================================================

/// Top-level classification bucket.
///
/// Declaration order is significant: [`Category::ALL`] is the order in which
/// the classifier scores categories, and earlier categories win ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Followup,
    Comparison,
    SpecificProduct,
    Recommendation,
    Availability,
    General,
    ProductSearch,
}

impl Category {
    /// Every category in scoring order.
    pub const ALL: [Category; 7] = [
        Category::Followup,
        Category::Comparison,
        Category::SpecificProduct,
        Category::Recommendation,
        Category::Availability,
        Category::General,
        Category::ProductSearch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Followup => "followup",
            Category::Comparison => "comparison",
            Category::SpecificProduct => "specific_product",
            Category::Recommendation => "recommendation",
            Category::Availability => "availability",
            Category::General => "general",
            Category::ProductSearch => "product_search",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Refined label within a category; selects the reply template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    // followup
    Affirmative,
    Negative,
    MoreInfo,
    Clarification,
    // comparison
    CompareProducts,
    // specific_product
    PriceInquiry,
    SpecsInquiry,
    ProductDetails,
    // recommendation
    GiftRecommendation,
    BestProduct,
    GeneralRecommendation,
    // availability
    StockCheck,
    // general
    Greeting,
    Help,
    Closing,
    GeneralInquiry,
    // product_search
    ProductSearch,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Affirmative => "affirmative",
            Intent::Negative => "negative",
            Intent::MoreInfo => "more_info",
            Intent::Clarification => "clarification",
            Intent::CompareProducts => "compare_products",
            Intent::PriceInquiry => "price_inquiry",
            Intent::SpecsInquiry => "specs_inquiry",
            Intent::ProductDetails => "product_details",
            Intent::GiftRecommendation => "gift_recommendation",
            Intent::BestProduct => "best_product",
            Intent::GeneralRecommendation => "general_recommendation",
            Intent::StockCheck => "stock_check",
            Intent::Greeting => "greeting",
            Intent::Help => "help",
            Intent::Closing => "closing",
            Intent::GeneralInquiry => "general_inquiry",
            Intent::ProductSearch => "product_search",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of token pulled out of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Brand,
    Product,
    Price,
    Amount,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Brand => write!(f, "brand"),
            EntityKind::Product => write!(f, "product"),
            EntityKind::Price => write!(f, "price"),
            EntityKind::Amount => write!(f, "amount"),
        }
    }
}

/// A tagged token, rendered as `kind:value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub kind: EntityKind,
    pub value: String,
}

impl Entity {
    pub fn new(kind: EntityKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

impl Serialize for Entity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Result of classifying one message against its context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub intent: Intent,
    pub entities: Vec<Entity>,
    /// Winning category score: 0.3 per matching pattern plus any context boost.
    pub confidence: f32,
}

/// Reply text for one turn together with how the turn was classified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub text: String,
    pub classification: Classification,
}
