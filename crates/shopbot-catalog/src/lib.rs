//! ShopBot catalog crate - product lookup behind a uniform async interface.
//!
//! Provides the [`ProductCatalog`] trait, an [`InMemoryCatalog`] repository
//! seeded with the default assortment, and an [`HttpCatalogClient`] for
//! catalogs hosted elsewhere.

pub mod error;
pub mod http;
pub mod memory;
pub mod types;

use async_trait::async_trait;

pub use error::CatalogError;
pub use http::HttpCatalogClient;
pub use memory::{default_products, InMemoryCatalog};
pub use types::{CatalogPage, CatalogQuery, ProductRecord, CATEGORIES, DEFAULT_LIMIT};

/// Source of product search results.
///
/// Implementations may be local or remote; callers treat every error as a
/// miss and never retry.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Run a search and return one page of results.
    async fn search(&self, query: &CatalogQuery) -> Result<CatalogPage, CatalogError>;
}
