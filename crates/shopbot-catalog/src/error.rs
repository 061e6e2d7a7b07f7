use shopbot_core::ShopbotError;
use thiserror::Error;

/// Errors raised while querying a product catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog could not be reached (connect failure, timeout).
    #[error("catalog transport error: {0}")]
    Transport(String),

    /// The catalog answered with a non-success status code.
    #[error("catalog returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The catalog answered but the payload was not a product page.
    #[error("failed to decode catalog response: {0}")]
    Decode(String),

    /// The query itself was rejected before reaching the catalog.
    #[error("invalid catalog query: {0}")]
    InvalidQuery(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}

impl From<CatalogError> for ShopbotError {
    fn from(err: CatalogError) -> Self {
        ShopbotError::Catalog(err.to_string())
    }
}
