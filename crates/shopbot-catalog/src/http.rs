//! HTTP client for a remote product catalog.
//!
//! Talks to any service that exposes `GET /api/products` with the same
//! query-string and JSON page shape the ShopBot API serves.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::CatalogError;
use crate::types::{CatalogPage, CatalogQuery};
use crate::ProductCatalog;

/// Remote catalog reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Create a client for the catalog rooted at `base_url`.
    ///
    /// `timeout` bounds each request end to end; a request that exceeds it
    /// surfaces as [`CatalogError::Transport`].
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(CatalogError::InvalidQuery(
                "catalog base URL must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalogClient {
    async fn search(&self, query: &CatalogQuery) -> Result<CatalogPage, CatalogError> {
        let url = self.products_url();
        debug!(url = %url, q = ?query.q, limit = query.limit, "Querying remote catalog");

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Remote catalog returned an error");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryCatalog;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::collections::HashMap;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base: &str) -> HttpCatalogClient {
        HttpCatalogClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let c = client("http://localhost:3030/");
        assert_eq!(c.base_url(), "http://localhost:3030");
        assert_eq!(c.products_url(), "http://localhost:3030/api/products");
    }

    #[test]
    fn test_new_rejects_empty_base_url() {
        let err = HttpCatalogClient::new("", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidQuery(_)));
    }

    #[tokio::test]
    async fn test_search_sends_query_string_and_decodes_page() {
        let router = Router::new().route(
            "/api/products",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let query = CatalogQuery {
                    q: params.get("q").cloned(),
                    limit: params["limit"].parse().unwrap(),
                    ..CatalogQuery::default()
                };
                Json(InMemoryCatalog::seeded().query(&query))
            }),
        );
        let base = serve(router).await;

        let page = client(&base)
            .search(&CatalogQuery::text("dell xps").with_limit(5))
            .await
            .unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.limit, 5);
        assert_eq!(page.products[0].name, "Dell XPS 13");
    }

    #[tokio::test]
    async fn test_search_maps_error_status() {
        let router = Router::new().route(
            "/api/products",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
        );
        let base = serve(router).await;

        let err = client(&base)
            .search(&CatalogQuery::text("laptop"))
            .await
            .unwrap_err();
        match err {
            CatalogError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "down for maintenance");
            }
            other => panic!("Expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_maps_undecodable_body() {
        let router = Router::new().route("/api/products", get(|| async { "not json" }));
        let base = serve(router).await;

        let err = client(&base)
            .search(&CatalogQuery::text("laptop"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[tokio::test]
    async fn test_search_unreachable_is_transport_error() {
        // Bind then drop so the port is known to be closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}", addr))
            .search(&CatalogQuery::text("laptop"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
    }
}
