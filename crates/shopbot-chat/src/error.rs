//! Error types for the shopping conversation pipeline.

use shopbot_catalog::CatalogError;

/// Errors from the chat engine.
///
/// Catalog failures are normally absorbed by the dispatcher; the variant
/// exists for callers that query the catalog directly.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("invalid transcript: {0}")]
    InvalidTranscript(String),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
