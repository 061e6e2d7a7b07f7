use thiserror::Error;

/// Top-level error type for the ShopBot system.
///
/// Subsystem crates define their own error types and convert into
/// `ShopbotError` at the composition root so that `?` works across crate
/// boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ShopbotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for ShopbotError {
    fn from(err: toml::de::Error) -> Self {
        ShopbotError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ShopbotError {
    fn from(err: toml::ser::Error) -> Self {
        ShopbotError::Config(err.to_string())
    }
}

/// A specialized `Result` type for ShopBot operations.
pub type Result<T> = std::result::Result<T, ShopbotError>;
