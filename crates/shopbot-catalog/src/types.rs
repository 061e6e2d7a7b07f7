use serde::{Deserialize, Serialize};

/// Default page size when a query does not specify one.
pub const DEFAULT_LIMIT: usize = 20;

/// Store-wide category names served by `/api/products/categories`.
pub const CATEGORIES: [&str; 19] = [
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Books",
    "Sports & Outdoors",
    "Beauty & Personal Care",
    "Pet Supplies",
    "Tools & Hardware",
    "Automotive",
    "Baby & Kids",
    "Office Supplies",
    "Musical Instruments",
    "Health & Wellness",
    "Jewelry & Watches",
    "Toys & Games",
    "Garden & Outdoor",
    "Craft & Hobby",
    "Food & Beverages",
    "Travel & Luggage",
];

/// A single product as stored in and returned by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub brand: String,
    pub in_stock: bool,
    pub rating: f64,
}

/// Search parameters for a catalog lookup.
///
/// Serializes to the query-string shape of `GET /api/products`, omitting
/// unset filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub in_stock: bool,
    pub limit: usize,
    pub offset: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            q: None,
            category: None,
            min_price: None,
            max_price: None,
            in_stock: false,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl CatalogQuery {
    /// Free-text query with default paging.
    pub fn text(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    pub products: Vec<ProductRecord>,
    /// Number of matches before pagination.
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}
