//! Conversation context analysis.
//!
//! Recovers the last product listing from the transcript tail so later
//! turns can refer back to it ("the second one", "yes").

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::types::{ConversationContext, ConversationType, Message, Role};

/// Phrase that marks an assistant reply as a product listing.
pub const LISTING_MARKER: &str = "I found";

/// Default number of trailing messages to inspect.
pub const DEFAULT_CONTEXT_WINDOW: usize = 6;

static LISTING_QUERY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"I found [0-9]+ products for "([^"]+)""#).expect("Invalid listing query regex")
});

static LISTING_PRODUCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"🔹 \*\*([^*]+)\*\*").expect("Invalid listing product regex")
});

/// Derives a [`ConversationContext`] from the newest messages of a transcript.
#[derive(Debug, Clone)]
pub struct ContextAnalyzer {
    window: usize,
}

impl ContextAnalyzer {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Scan newest-first through the window and stop at the first assistant
    /// listing. Returns the zero context when none is found.
    pub fn analyze(&self, messages: &[Message]) -> ConversationContext {
        let listing = messages
            .iter()
            .rev()
            .take(self.window)
            .find(|m| m.role == Role::Assistant && m.content.contains(LISTING_MARKER));

        let Some(listing) = listing else {
            return ConversationContext::default();
        };

        let last_product_query = LISTING_QUERY
            .captures(&listing.content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let last_products: Vec<String> = LISTING_PRODUCT
            .captures_iter(&listing.content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        debug!(
            query = %last_product_query,
            products = last_products.len(),
            "Recovered product listing from transcript"
        );

        ConversationContext {
            has_products: true,
            last_product_query,
            last_products,
            conversation_type: ConversationType::ProductSearch,
        }
    }
}

impl Default for ContextAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "I found 2 products for \"dell\":\n\n\
        🔹 **Dell XPS 13** by Dell\n   💰 $899\n   📝 Ultra-portable laptop\n   ✅ In Stock\n\n\
        🔹 **MacBook Air M3** by Apple\n   💰 $1299\n   📝 13-inch laptop\n   ✅ In Stock\n";

    fn analyzer() -> ContextAnalyzer {
        ContextAnalyzer::default()
    }

    // ---- Absence ----

    #[test]
    fn test_empty_transcript() {
        let ctx = analyzer().analyze(&[]);
        assert_eq!(ctx, ConversationContext::default());
    }

    #[test]
    fn test_no_marker_means_no_products() {
        let messages = vec![
            Message::user("hello"),
            Message::assistant("Hello! Welcome to ShopBot!"),
            Message::user("show me phones"),
        ];
        let ctx = analyzer().analyze(&messages);
        assert!(!ctx.has_products);
        assert!(ctx.last_products.is_empty());
        assert_eq!(ctx.conversation_type, ConversationType::General);
    }

    #[test]
    fn test_marker_in_user_message_is_ignored() {
        let messages = vec![Message::user(LISTING)];
        let ctx = analyzer().analyze(&messages);
        assert!(!ctx.has_products);
    }

    // ---- Extraction ----

    #[test]
    fn test_extracts_query_and_products() {
        let messages = vec![
            Message::user("dell"),
            Message::assistant(LISTING),
            Message::user("tell me about the second one"),
        ];
        let ctx = analyzer().analyze(&messages);
        assert!(ctx.has_products);
        assert_eq!(ctx.last_product_query, "dell");
        assert_eq!(ctx.last_products, vec!["Dell XPS 13", "MacBook Air M3"]);
        assert_eq!(ctx.conversation_type, ConversationType::ProductSearch);
    }

    #[test]
    fn test_marker_without_bullets() {
        let messages = vec![Message::assistant("I found nothing worth showing")];
        let ctx = analyzer().analyze(&messages);
        assert!(ctx.has_products);
        assert!(ctx.last_product_query.is_empty());
        assert!(ctx.last_products.is_empty());
    }

    #[test]
    fn test_newest_listing_wins() {
        let older = "I found 1 products for \"sony\":\n\n🔹 **Sony WH-1000XM5** by Sony\n";
        let messages = vec![
            Message::assistant(older),
            Message::user("dell"),
            Message::assistant(LISTING),
        ];
        let ctx = analyzer().analyze(&messages);
        assert_eq!(ctx.last_product_query, "dell");
        assert_eq!(ctx.last_products[0], "Dell XPS 13");
    }

    // ---- Window ----

    #[test]
    fn test_listing_outside_window_is_ignored() {
        let mut messages = vec![Message::assistant(LISTING)];
        for i in 0..6 {
            messages.push(Message::user(format!("message {}", i)));
        }
        assert!(!analyzer().analyze(&messages).has_products);

        // Drop one filler message and the listing is the sixth from the end.
        messages.pop();
        assert!(analyzer().analyze(&messages).has_products);
    }

    #[test]
    fn test_custom_window() {
        let messages = vec![Message::assistant(LISTING), Message::user("a"), Message::user("b")];
        assert!(!ContextAnalyzer::new(2).analyze(&messages).has_products);
        assert!(ContextAnalyzer::new(3).analyze(&messages).has_products);
        assert_eq!(ContextAnalyzer::new(3).window(), 3);
    }
}
