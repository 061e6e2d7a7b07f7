//! Conversational shopping assistant for ShopBot.
//!
//! Turns a chat transcript into a reply: recovers the last product listing
//! from the transcript, classifies the newest message with keyword rules,
//! resolves product references and answers from templates or the product
//! catalog.

pub mod classifier;
pub mod context;
pub mod entity;
pub mod error;
pub mod orchestrator;
pub mod resolver;
pub mod response;
pub mod transcript;
pub mod types;

pub use classifier::IntentClassifier;
pub use context::ContextAnalyzer;
pub use entity::EntityExtractor;
pub use error::ChatError;
pub use orchestrator::ChatOrchestrator;
pub use resolver::ReferenceResolver;
pub use transcript::parse_transcript;
pub use types::{
    Category, ChatReply, Classification, ConversationContext, ConversationType, Entity,
    EntityKind, Intent, Message, Role,
};
