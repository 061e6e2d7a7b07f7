//! Chat orchestrator: runs the context, classification and resolution steps
//! and dispatches to a reply strategy.
//!
//! Each call is independent. The transcript is re-analyzed every turn and the
//! only awaits are the catalog lookups, issued one at a time.

use std::sync::Arc;

use regex::Regex;
use shopbot_catalog::{CatalogQuery, ProductCatalog, ProductRecord};
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use crate::classifier::IntentClassifier;
use crate::context::{ContextAnalyzer, DEFAULT_CONTEXT_WINDOW};
use crate::error::ChatError;
use crate::resolver::ReferenceResolver;
use crate::response;
use crate::types::{Category, ChatReply, Classification, ConversationContext, Intent, Message};

/// Products requested per chat-driven search.
pub const DEFAULT_PAGE_SIZE: usize = 5;

static COMPARISON_SPLIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(.+?)\s+(?:vs|versus|compared?\s+to|against)\s+(.+)")
        .expect("Invalid comparison regex")
});

/// Split "A vs B" style requests into their two sides.
pub fn split_comparison(message: &str) -> Option<(String, String)> {
    let caps = COMPARISON_SPLIT.captures(message)?;
    let first = caps.get(1)?.as_str().trim().to_string();
    let second = caps.get(2)?.as_str().trim().to_string();
    Some((first, second))
}

/// Central coordinator for one chat turn.
pub struct ChatOrchestrator {
    catalog: Arc<dyn ProductCatalog>,
    analyzer: ContextAnalyzer,
    classifier: IntentClassifier,
    resolver: ReferenceResolver,
    page_size: usize,
}

impl ChatOrchestrator {
    /// Create an orchestrator with the default context window and page size.
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        Self::with_settings(catalog, DEFAULT_CONTEXT_WINDOW, DEFAULT_PAGE_SIZE)
    }

    pub fn with_settings(
        catalog: Arc<dyn ProductCatalog>,
        context_window: usize,
        page_size: usize,
    ) -> Self {
        Self {
            catalog,
            analyzer: ContextAnalyzer::new(context_window),
            classifier: IntentClassifier::new(),
            resolver: ReferenceResolver,
            page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Produce the reply for the last message of `messages`.
    ///
    /// Never fails: catalog problems degrade to keyword suggestions.
    pub async fn respond(&self, messages: &[Message]) -> ChatReply {
        let latest = messages.last().map(|m| m.content.as_str()).unwrap_or_default();

        let context = self.analyzer.analyze(messages);
        let classification = self.classifier.classify(latest, &context);
        let text = self.dispatch(&classification, latest, &context).await;

        info!(
            messages = messages.len(),
            category = %classification.category,
            intent = %classification.intent,
            confidence = classification.confidence,
            has_products = context.has_products,
            reply_len = text.len(),
            "Chat turn answered"
        );

        ChatReply {
            text,
            classification,
        }
    }

    /// Select and run the reply strategy for a classified message.
    pub async fn dispatch(
        &self,
        classification: &Classification,
        message: &str,
        context: &ConversationContext,
    ) -> String {
        let intent = classification.intent;
        match classification.category {
            Category::Followup => match intent {
                Intent::Affirmative => response::followup_affirmative(context),
                Intent::Negative => response::FOLLOWUP_NEGATIVE.to_string(),
                Intent::MoreInfo => response::followup_more_info(context),
                _ => response::FOLLOWUP_CLARIFICATION.to_string(),
            },
            Category::Comparison => self.compare(message, context).await,
            Category::SpecificProduct => {
                let Some(product) = self.resolver.resolve(message, context) else {
                    return response::PRODUCT_CLARIFICATION.to_string();
                };
                match intent {
                    Intent::PriceInquiry => response::price_inquiry(&product),
                    Intent::SpecsInquiry => response::specs_inquiry(&product),
                    _ => self.product_search(&product).await,
                }
            }
            Category::Recommendation => match intent {
                Intent::GiftRecommendation => response::GIFT_RECOMMENDATION.to_string(),
                Intent::BestProduct => response::BEST_PRODUCT.to_string(),
                _ => self.product_search(message).await,
            },
            Category::Availability => match self.resolver.resolve(message, context) {
                Some(product) => {
                    let mut text = self.product_search(&product).await;
                    text.push_str(response::AVAILABILITY_HELP);
                    text
                }
                None => response::AVAILABILITY_CLARIFICATION.to_string(),
            },
            Category::General => match intent {
                Intent::Greeting => response::GREETING.to_string(),
                Intent::Help => response::HELP.to_string(),
                Intent::Closing => response::CLOSING.to_string(),
                _ => response::GENERAL_INQUIRY.to_string(),
            },
            Category::ProductSearch => self.product_search(message).await,
        }
    }

    /// Search the catalog and render a listing, or fall back to keyword
    /// suggestions when nothing comes back.
    pub async fn product_search(&self, query: &str) -> String {
        match self.fetch_products(query).await {
            Ok(products) if !products.is_empty() => response::render_listing(query, &products),
            Ok(_) => {
                debug!(query, "Catalog returned no products");
                response::fallback_for_query(query)
            }
            Err(e) => {
                warn!(query, error = %e, "Catalog search failed, using fallback reply");
                response::fallback_for_query(query)
            }
        }
    }

    async fn fetch_products(&self, query: &str) -> Result<Vec<ProductRecord>, ChatError> {
        let request = CatalogQuery::text(query).with_limit(self.page_size);
        let page = self.catalog.search(&request).await?;
        debug!(query, total = page.total, returned = page.products.len(), "Catalog search complete");
        Ok(page.products)
    }

    async fn compare(&self, message: &str, context: &ConversationContext) -> String {
        if context.last_products.len() >= 2 {
            return response::comparison_offer(&context.last_products);
        }

        let Some((first, second)) = split_comparison(message) else {
            return response::COMPARISON_CLARIFICATION.to_string();
        };

        // Sequential on purpose: the two lookups never overlap.
        let first_reply = self.product_search(&first).await;
        let second_reply = self.product_search(&second).await;
        response::comparison_results(&first, &second, &first_reply, &second_reply)
    }
}
