//! In-process product repository.
//!
//! Holds the product list in memory and answers catalog queries with the same
//! free-text matching, filtering and pagination rules the HTTP endpoint
//! exposes. Instances are constructed explicitly and injected wherever a
//! [`ProductCatalog`] is needed.

use async_trait::async_trait;
use tracing::debug;

use crate::error::CatalogError;
use crate::types::{CatalogPage, CatalogQuery, ProductRecord};
use crate::ProductCatalog;

/// Query words that never narrow a search.
const STOP_WORDS: [&str; 7] = ["show", "me", "find", "get", "the", "a", "an"];

/// Name fragments that mark a product as a laptop even when its text never
/// says so.
const LAPTOP_NAME_HINTS: [&str; 6] = [
    "laptop", "macbook", "thinkpad", "pavilion", "aspire", "surface",
];

/// Product catalog backed by an in-memory list.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    products: Vec<ProductRecord>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    /// Catalog pre-loaded with the default electronics assortment.
    pub fn seeded() -> Self {
        Self::new(default_products())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Run a query synchronously.
    ///
    /// Filters apply in order: free text, category, minimum price, maximum
    /// price, stock. `total` counts matches before `offset`/`limit` are
    /// applied.
    pub fn query(&self, query: &CatalogQuery) -> CatalogPage {
        let term = query
            .q
            .as_deref()
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());
        let category = query.category.as_deref().map(str::to_lowercase);

        let matched: Vec<&ProductRecord> = self
            .products
            .iter()
            .filter(|p| term.as_deref().map_or(true, |t| matches_text(p, t)))
            .filter(|p| {
                category
                    .as_deref()
                    .map_or(true, |c| p.category.to_lowercase() == c)
            })
            .filter(|p| query.min_price.map_or(true, |min| p.price >= min))
            .filter(|p| query.max_price.map_or(true, |max| p.price <= max))
            .filter(|p| !query.in_stock || p.in_stock)
            .collect();

        let total = matched.len();
        let products: Vec<ProductRecord> = matched
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect();

        debug!(
            q = ?query.q,
            total,
            returned = products.len(),
            "Catalog query evaluated"
        );

        CatalogPage {
            products,
            total,
            limit: query.limit,
            offset: query.offset,
            has_more: query.offset.saturating_add(query.limit) < total,
        }
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn search(&self, query: &CatalogQuery) -> Result<CatalogPage, CatalogError> {
        Ok(self.query(query))
    }
}

/// Build the lower-cased haystack a free-text term is matched against.
fn searchable_text(product: &ProductRecord) -> String {
    let compact: String = product.name.chars().filter(|c| !c.is_whitespace()).collect();
    let plain: String = product
        .name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    let branded = format!("{} {}", product.brand, product.name);

    [
        product.name.as_str(),
        product.brand.as_str(),
        product.description.as_str(),
        product.category.as_str(),
        compact.as_str(),
        branded.as_str(),
        plain.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

fn is_laptop(product: &ProductRecord) -> bool {
    let name = product.name.to_lowercase();
    product.description.to_lowercase().contains("laptop")
        || LAPTOP_NAME_HINTS.iter().any(|hint| name.contains(hint))
}

/// `term` must already be trimmed and lower-cased.
fn matches_text(product: &ProductRecord, term: &str) -> bool {
    let haystack = searchable_text(product);

    let all_words = term
        .split_whitespace()
        .all(|word| STOP_WORDS.contains(&word) || haystack.contains(word));
    if all_words || haystack.contains(term) {
        return true;
    }

    (term.contains("laptop") || term.contains("computer")) && is_laptop(product)
}

fn product(
    id: &str,
    name: &str,
    price: f64,
    description: &str,
    brand: &str,
    in_stock: bool,
    rating: f64,
) -> ProductRecord {
    ProductRecord {
        id: id.to_string(),
        name: name.to_string(),
        category: "Electronics".to_string(),
        price,
        description: description.to_string(),
        brand: brand.to_string(),
        in_stock,
        rating,
    }
}

/// The default assortment served when no external catalog is configured.
#[rustfmt::skip]
pub fn default_products() -> Vec<ProductRecord> {
    vec![
        product("1", "iPhone 15 Pro", 999.0,
            "Latest iPhone with A17 Pro chip, titanium design, and advanced camera system",
            "Apple", true, 4.8),
        product("2", "Samsung Galaxy S24 Ultra", 1199.0,
            "Premium Android phone with S Pen, 200MP camera, and AI features",
            "Samsung", true, 4.7),
        product("3", "MacBook Air M3", 1299.0,
            "13-inch laptop with M3 chip, 18-hour battery life, and Liquid Retina display",
            "Apple", true, 4.9),
        product("4", "Dell XPS 13", 899.0,
            "Ultra-portable laptop with Intel Core i7, 16GB RAM, and InfinityEdge display",
            "Dell", true, 4.6),
        product("5", "iPad Pro 12.9\"", 1099.0,
            "Professional tablet with M2 chip, Liquid Retina XDR display, and Apple Pencil support",
            "Apple", true, 4.8),
        product("6", "Sony WH-1000XM5", 399.0,
            "Premium noise-canceling headphones with 30-hour battery life",
            "Sony", true, 4.7),
        product("7", "AirPods Pro 2nd Gen", 249.0,
            "Wireless earbuds with active noise cancellation and spatial audio",
            "Apple", true, 4.8),
        product("8", "Lenovo ThinkPad X1 Carbon", 1599.0,
            "Business laptop with Intel Core i7, 16GB RAM, and carbon fiber design",
            "Lenovo", true, 4.5),
        product("9", "HP Pavilion 15", 699.0,
            "Affordable laptop with AMD Ryzen 5, 8GB RAM, perfect for students",
            "HP", true, 4.3),
        product("10", "ASUS ROG Strix Gaming Laptop", 1299.0,
            "Gaming laptop with NVIDIA RTX 4060, Intel Core i7, 16GB RAM",
            "ASUS", true, 4.7),
        product("11", "Microsoft Surface Laptop 5", 999.0,
            "Premium laptop with Intel Core i5, 8GB RAM, and touchscreen display",
            "Microsoft", true, 4.4),
        product("12", "Acer Aspire 5", 549.0,
            "Budget-friendly laptop with Intel Core i5, 8GB RAM, ideal for everyday use",
            "Acer", true, 4.2),
        product("13", "Nintendo Switch OLED", 349.0,
            "Gaming console with 7-inch OLED screen and enhanced audio",
            "Nintendo", true, 4.6),
        product("14", "PlayStation 5", 499.0,
            "Next-gen gaming console with 4K gaming and ultra-fast SSD",
            "Sony", false, 4.9),
        product("15", "Xbox Series X", 499.0,
            "Powerful gaming console with 4K gaming at 120fps",
            "Microsoft", true, 4.8),
    ]
}
