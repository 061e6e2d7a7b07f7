//! Reference resolution: turn "the second one" or "the xps" into a product
//! name.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::ConversationContext;

struct OrdinalPatterns {
    first: Regex,
    second: Regex,
    third: Regex,
}

static ORDINALS: LazyLock<OrdinalPatterns> = LazyLock::new(|| {
    let mk = |p: &str| Regex::new(p).expect("Invalid ordinal regex");
    OrdinalPatterns {
        first: mk(r"(first|1st|option 1|the first)"),
        second: mk(r"(second|2nd|option 2|the second)"),
        third: mk(r"(third|3rd|option 3|the third)"),
    }
});

/// Known model naming schemes, tried in order. Digit and word classes are
/// ASCII only.
static PRODUCT_NAME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:dell\s+)?xps\s*[0-9]*",
        r"(?i)macbook\s*(?:air|pro)?",
        r"(?i)iphone\s*[0-9]*\s*(?:pro|plus|mini)?",
        r"(?i)samsung\s*galaxy\s*[A-Za-z0-9_]*",
        r"(?i)thinkpad\s*[A-Za-z0-9_]*",
        r"(?i)surface\s*(?:laptop|pro)?\s*[0-9]*",
        r"(?i)airpods\s*(?:pro)?",
        r"(?i)playstation\s*[0-9]*",
        r"(?i)xbox\s*(?:series\s*[xs])?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid product name regex"))
    .collect()
});

/// Words shorter than this never count as a partial name match.
const MIN_MATCH_WORD_LEN: usize = 3;

/// Resolves a product reference in a message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceResolver;

impl ReferenceResolver {
    /// Resolve against the context first, then against known model names.
    ///
    /// Returns `None` when nothing matches; callers answer with a
    /// clarification prompt.
    pub fn resolve(&self, message: &str, context: &ConversationContext) -> Option<String> {
        self.resolve_from_context(message, context)
            .or_else(|| self.extract_product_name(message))
    }

    /// Ordinal phrases, then partial name matches against the last listing.
    pub fn resolve_from_context(
        &self,
        message: &str,
        context: &ConversationContext,
    ) -> Option<String> {
        let products = &context.last_products;
        let first = products.first()?;
        let lower = message.to_lowercase();
        let ordinals = &*ORDINALS;

        if ordinals.first.is_match(&lower) {
            return Some(first.clone());
        }
        if ordinals.second.is_match(&lower) {
            return Some(products.get(1).unwrap_or(first).clone());
        }
        if ordinals.third.is_match(&lower) {
            return Some(products.get(2).unwrap_or(first).clone());
        }

        products
            .iter()
            .find(|product| {
                product
                    .to_lowercase()
                    .split(' ')
                    .any(|word| word.len() >= MIN_MATCH_WORD_LEN && lower.contains(word))
            })
            .cloned()
    }

    /// First known model pattern found in the message, verbatim.
    pub fn extract_product_name(&self, message: &str) -> Option<String> {
        PRODUCT_NAME_PATTERNS
            .iter()
            .find_map(|re| re.find(message))
            .map(|m| m.as_str().to_string())
    }
}
