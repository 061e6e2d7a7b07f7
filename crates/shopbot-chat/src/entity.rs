//! Entity extraction: brands, product types, price qualifiers and amounts.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{Entity, EntityKind};

pub const BRANDS: [&str; 10] = [
    "apple", "samsung", "dell", "hp", "lenovo", "sony", "microsoft", "asus", "acer", "nintendo",
];

pub const PRODUCT_TYPES: [&str; 9] = [
    "laptop", "phone", "headphone", "console", "tablet", "gaming", "macbook", "iphone", "ipad",
];

pub const PRICE_TERMS: [&str; 6] = ["under", "over", "budget", "cheap", "expensive", "affordable"];

static AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$?([0-9]+)").expect("Invalid amount regex"));

/// Vocabulary-driven entity extractor.
///
/// Membership is a plain substring test, so "phone" also fires inside
/// "headphones". Output order is vocabulary order per pass, not message order.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityExtractor;

impl EntityExtractor {
    /// Extract entities from an already lower-cased message.
    pub fn extract(&self, message: &str) -> Vec<Entity> {
        let passes: [(EntityKind, &[&str]); 3] = [
            (EntityKind::Brand, &BRANDS),
            (EntityKind::Product, &PRODUCT_TYPES),
            (EntityKind::Price, &PRICE_TERMS),
        ];

        let mut entities = Vec::new();
        for (kind, vocab) in passes {
            for term in vocab {
                if message.contains(term) {
                    entities.push(Entity::new(kind, *term));
                }
            }
        }

        entities.extend(
            AMOUNT
                .captures_iter(message)
                .filter_map(|caps| caps.get(1))
                .map(|digits| Entity::new(EntityKind::Amount, digits.as_str())),
        );

        entities
    }
}
