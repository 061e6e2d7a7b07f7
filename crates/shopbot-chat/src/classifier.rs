//! Rule-based intent classification.
//!
//! Every category owns an ordered pattern list and an intent sub-rule table.
//! A message scores 0.3 per matching category pattern; `followup` gets an
//! extra 0.4 whenever the context already shows products. The strictly
//! highest score wins, scanning categories in [`Category::ALL`] order, so
//! ties go to the earlier category.
//!
//! Patterns are unanchored substring matches: "hi" fires inside "which".

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::entity::EntityExtractor;
use crate::types::{Category, Classification, ConversationContext, Intent};

/// Score per matching pattern, in tenths.
const PATTERN_WEIGHT: u32 = 3;

/// Follow-up boost when the context has products, in tenths.
const FOLLOWUP_CONTEXT_BOOST: u32 = 4;

// =============================================================================
// Category rule table
// =============================================================================

struct CategoryRule {
    category: Category,
    patterns: Vec<Regex>,
    /// First matching sub-rule picks the intent.
    intents: Vec<(Regex, Intent)>,
    default_intent: Intent,
}

static CATEGORY_RULES: LazyLock<Vec<CategoryRule>> = LazyLock::new(|| {
    let mk = |pats: &[&str]| -> Vec<Regex> {
        pats.iter()
            .map(|p| Regex::new(p).expect("Invalid category regex"))
            .collect()
    };
    let sub = |rules: &[(&str, Intent)]| -> Vec<(Regex, Intent)> {
        rules
            .iter()
            .map(|(p, intent)| (Regex::new(p).expect("Invalid intent regex"), *intent))
            .collect()
    };

    vec![
        CategoryRule {
            category: Category::Followup,
            patterns: mk(&[
                r"^(yes|yeah|sure|ok|okay|yep|yup)$",
                r"^(no|nope|not really|not interested)$",
                r"(tell me more|more details|more info|show more|elaborate)",
                r"(which one|what about|how about|what's the difference)",
            ]),
            intents: sub(&[
                (r"^(yes|yeah|sure|ok|okay)$", Intent::Affirmative),
                (r"^(no|nope|not really)$", Intent::Negative),
                (r"(more details|tell me more)", Intent::MoreInfo),
            ]),
            default_intent: Intent::Clarification,
        },
        CategoryRule {
            category: Category::Comparison,
            patterns: mk(&[
                r"(compare|vs|versus|difference between|better than)",
                r"(which is better|which should i choose|what's the difference)",
                r"(pros and cons|advantages|disadvantages)",
            ]),
            intents: Vec::new(),
            default_intent: Intent::CompareProducts,
        },
        CategoryRule {
            category: Category::SpecificProduct,
            patterns: mk(&[
                r"(tell me about|more about|details about|info about)",
                r"(specs|specifications|features|review)",
                r"(price of|cost of|how much)",
            ]),
            intents: sub(&[
                (r"(price|cost|how much)", Intent::PriceInquiry),
                (r"(specs|specifications|features)", Intent::SpecsInquiry),
            ]),
            default_intent: Intent::ProductDetails,
        },
        CategoryRule {
            category: Category::Recommendation,
            patterns: mk(&[
                r"(recommend|suggest|best|good|what should)",
                r"(looking for|need|want|searching for)",
                r"(gift|present|for someone)",
            ]),
            intents: sub(&[
                (r"(gift|present)", Intent::GiftRecommendation),
                (r"(best|good)", Intent::BestProduct),
            ]),
            default_intent: Intent::GeneralRecommendation,
        },
        CategoryRule {
            category: Category::Availability,
            patterns: mk(&[
                r"(in stock|available|can i buy|do you have)",
                r"(when will|delivery|shipping|order)",
            ]),
            intents: Vec::new(),
            default_intent: Intent::StockCheck,
        },
        CategoryRule {
            category: Category::General,
            patterns: mk(&[
                r"(hello|hi|hey|good morning|good afternoon)",
                r"(help|what can you do|how does this work)",
                r"(thank you|thanks|bye|goodbye)",
            ]),
            intents: sub(&[
                (r"(hello|hi|hey)", Intent::Greeting),
                (r"(help|what can you do)", Intent::Help),
                (r"(thank|bye)", Intent::Closing),
            ]),
            default_intent: Intent::GeneralInquiry,
        },
        CategoryRule {
            category: Category::ProductSearch,
            patterns: mk(&[
                r"(show me|find|search|look for)",
                r"(laptop|phone|headphone|gaming|console)",
                r"(under|over|between|budget|cheap|expensive)",
            ]),
            intents: Vec::new(),
            default_intent: Intent::ProductSearch,
        },
    ]
});

fn rule_for(category: Category) -> Option<&'static CategoryRule> {
    CATEGORY_RULES.iter().find(|r| r.category == category)
}

// =============================================================================
// IntentClassifier
// =============================================================================

/// Scores a message against every category and refines the winner's intent.
///
/// Stateless: the same message and context always produce the same
/// [`Classification`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier {
    extractor: EntityExtractor,
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the latest user message in light of the conversation context.
    pub fn classify(&self, message: &str, context: &ConversationContext) -> Classification {
        let lower = message.trim().to_lowercase();
        let entities = self.extractor.extract(&lower);

        let mut best = (Category::General, 0u32);
        for (category, score) in score_categories(&lower, context) {
            if score > best.1 {
                best = (category, score);
            }
        }
        let (category, score) = best;
        let intent = determine_intent(category, &lower);

        debug!(
            category = %category,
            intent = %intent,
            score,
            entities = entities.len(),
            "Message classified"
        );

        Classification {
            category,
            intent,
            entities,
            confidence: score as f32 / 10.0,
        }
    }
}

/// Per-category scores in tenths, in scoring order.
fn score_categories(lower: &str, context: &ConversationContext) -> Vec<(Category, u32)> {
    CATEGORY_RULES
        .iter()
        .map(|rule| {
            let hits = rule.patterns.iter().filter(|re| re.is_match(lower)).count() as u32;
            let mut score = hits * PATTERN_WEIGHT;
            if rule.category == Category::Followup && context.has_products {
                score += FOLLOWUP_CONTEXT_BOOST;
            }
            (rule.category, score)
        })
        .collect()
}

/// Apply the category's intent sub-rules to an already lower-cased message.
pub fn determine_intent(category: Category, lower: &str) -> Intent {
    match rule_for(category) {
        Some(rule) => rule
            .intents
            .iter()
            .find(|(re, _)| re.is_match(lower))
            .map(|(_, intent)| *intent)
            .unwrap_or(rule.default_intent),
        None => Intent::ProductSearch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ConversationType;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new()
    }

    fn empty() -> ConversationContext {
        ConversationContext::default()
    }

    fn with_products() -> ConversationContext {
        ConversationContext {
            has_products: true,
            last_product_query: "laptop".to_string(),
            last_products: vec!["Dell XPS 13".to_string(), "MacBook Air M3".to_string()],
            conversation_type: ConversationType::ProductSearch,
        }
    }

    fn classify(message: &str) -> Classification {
        classifier().classify(message, &empty())
    }

    // ---- Rule table ----

    #[test]
    fn test_rule_table_follows_category_order() {
        let order: Vec<Category> = CATEGORY_RULES.iter().map(|r| r.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    // ---- Scoring ----

    #[test]
    fn test_empty_message_defaults_to_general() {
        let c = classify("");
        assert_eq!(c.category, Category::General);
        assert_eq!(c.intent, Intent::GeneralInquiry);
        assert_eq!(c.confidence, 0.0);
        assert!(c.entities.is_empty());
    }

    #[test]
    fn test_unmatched_message_defaults_to_general() {
        let c = classify("xyzzy");
        assert_eq!(c.category, Category::General);
        assert_eq!(c.confidence, 0.0);
    }

    #[test]
    fn test_product_search_scores_every_pattern() {
        let c = classify("Show me laptops under $1000");
        assert_eq!(c.category, Category::ProductSearch);
        assert_eq!(c.intent, Intent::ProductSearch);
        assert!((c.confidence - 0.9).abs() < 1e-6);
        let tags: Vec<String> = c.entities.iter().map(|e| e.to_string()).collect();
        assert_eq!(tags, vec!["product:laptop", "price:under", "amount:1000"]);
    }

    #[test]
    fn test_followup_boost_applies_without_pattern_match() {
        let scores = score_categories("xyzzy", &with_products());
        assert_eq!(scores[0], (Category::Followup, FOLLOWUP_CONTEXT_BOOST));

        let c = classifier().classify("xyzzy", &with_products());
        assert_eq!(c.category, Category::Followup);
        assert_eq!(c.intent, Intent::Clarification);
        assert!((c.confidence - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_followup_boost_can_beat_stronger_category() {
        // Product search scores 0.6 but follow-up gets 0.3 + 0.4.
        let c = classifier().classify("how about a cheap gaming laptop", &with_products());
        assert_eq!(c.category, Category::Followup);
        assert!((c.confidence - 0.7).abs() < 1e-6);
    }

    // ---- Tie-break ----

    #[test]
    fn test_tie_goes_to_earlier_category() {
        let scores = score_categories("what's the difference", &empty());
        assert_eq!(scores[0], (Category::Followup, 3));
        assert_eq!(scores[1], (Category::Comparison, 3));

        let c = classify("what's the difference");
        assert_eq!(c.category, Category::Followup);
    }

    #[test]
    fn test_tie_recommendation_beats_product_search() {
        let c = classify("recommend a console");
        assert_eq!(c.category, Category::Recommendation);
        assert_eq!(c.intent, Intent::GeneralRecommendation);
    }

    #[test]
    fn test_substring_general_match_ties_followup() {
        // "which" contains "hi"; follow-up still wins the tie.
        let scores = score_categories("which one", &empty());
        assert_eq!(scores[5], (Category::General, 3));
        assert_eq!(classify("which one").category, Category::Followup);
    }

    // ---- Follow-up intents ----

    #[test]
    fn test_affirmative_tokens() {
        for token in ["yes", "yeah", "sure", "ok", "okay", "YES", "  Okay  "] {
            let c = classify(token);
            assert_eq!(c.category, Category::Followup, "token {:?}", token);
            assert_eq!(c.intent, Intent::Affirmative, "token {:?}", token);

            let c = classifier().classify(token, &with_products());
            assert_eq!(c.intent, Intent::Affirmative, "token {:?}", token);
        }
    }

    #[test]
    fn test_yep_is_followup_but_not_affirmative() {
        let c = classify("yep");
        assert_eq!(c.category, Category::Followup);
        assert_eq!(c.intent, Intent::Clarification);
    }

    #[test]
    fn test_negative_tokens() {
        for token in ["no", "nope", "not really"] {
            let c = classify(token);
            assert_eq!(c.category, Category::Followup);
            assert_eq!(c.intent, Intent::Negative);
        }
        assert_eq!(classify("not interested").intent, Intent::Clarification);
    }

    #[test]
    fn test_more_info() {
        let c = classifier().classify("tell me more", &with_products());
        assert_eq!(c.category, Category::Followup);
        assert_eq!(c.intent, Intent::MoreInfo);
    }

    // ---- Other categories ----

    #[test]
    fn test_comparison() {
        let c = classify("iPhone 15 Pro vs Samsung Galaxy S24 Ultra");
        assert_eq!(c.category, Category::Comparison);
        assert_eq!(c.intent, Intent::CompareProducts);
    }

    #[test]
    fn test_specific_product_intents() {
        let c = classify("what are the specs of the dell xps");
        assert_eq!(c.category, Category::SpecificProduct);
        assert_eq!(c.intent, Intent::SpecsInquiry);

        let c = classify("how much is the macbook air");
        assert_eq!(c.category, Category::SpecificProduct);
        assert_eq!(c.intent, Intent::PriceInquiry);

        let c = classify("tell me about the dell xps 13");
        assert_eq!(c.category, Category::SpecificProduct);
        assert_eq!(c.intent, Intent::ProductDetails);
    }

    #[test]
    fn test_recommendation_intents() {
        let c = classify("i need a gift for my dad");
        assert_eq!(c.category, Category::Recommendation);
        assert_eq!(c.intent, Intent::GiftRecommendation);

        let c = classify("what should i get, the best one?");
        assert_eq!(c.category, Category::Recommendation);
        assert_eq!(c.intent, Intent::BestProduct);
    }

    #[test]
    fn test_availability() {
        let c = classify("is the playstation 5 in stock");
        assert_eq!(c.category, Category::Availability);
        assert_eq!(c.intent, Intent::StockCheck);
    }

    #[test]
    fn test_general_intents() {
        assert_eq!(classify("hello").intent, Intent::Greeting);
        assert_eq!(classify("what can you do").intent, Intent::Help);
        assert_eq!(classify("thanks, bye").intent, Intent::Closing);
        assert_eq!(classify("hey there").intent, Intent::Greeting);
        // "good" is also a recommendation cue, which is declared first.
        assert_eq!(classify("good afternoon").category, Category::Recommendation);
    }

    #[test]
    fn test_determine_intent_directly() {
        assert_eq!(
            determine_intent(Category::General, "good morning"),
            Intent::GeneralInquiry
        );
        assert_eq!(
            determine_intent(Category::ProductSearch, "anything"),
            Intent::ProductSearch
        );
    }

    // ---- Purity ----

    #[test]
    fn test_classification_is_idempotent() {
        let ctx = with_products();
        for message in ["yes", "compare them", "show me phones", "", "the second one"] {
            let first = classifier().classify(message, &ctx);
            let second = classifier().classify(message, &ctx);
            assert_eq!(first, second);
        }
    }
}
