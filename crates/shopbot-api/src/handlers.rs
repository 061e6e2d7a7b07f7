//! Route handler functions for all API endpoints.

use std::str::FromStr;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use shopbot_catalog::{CatalogPage, CatalogQuery, CATEGORIES};
use shopbot_chat::parse_transcript;

use crate::error::{apology_response, ApiError};
use crate::state::AppState;

/// Response header carrying the classified category of a chat turn.
pub const CATEGORY_HEADER: &str = "x-shopbot-category";

/// Response header carrying the refined intent of a chat turn.
pub const INTENT_HEADER: &str = "x-shopbot-intent";

// =============================================================================
// Query parameter types
// =============================================================================

/// Raw query string of `GET /api/products`.
///
/// Numbers arrive as strings so malformed values can be reported as 400s
/// with the parameter name.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub in_stock: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub catalog_size: usize,
}

// =============================================================================
// Chat
// =============================================================================

/// POST /api/chat - answer the last message of a transcript in plain text.
///
/// The body is `{"messages": [{"role": ..., "content": ...}, ...]}`. Any
/// failure to read it, including an oversized body, yields the plain-text
/// apology with status 500.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!("chat", %request_id);

    async move {
        let body = match body {
            Ok(body) => body,
            Err(rejection) => {
                error!(
                    status = %rejection.status(),
                    error = %rejection.body_text(),
                    "Failed to read chat body"
                );
                return apology_response();
            }
        };

        let messages = match parse_transcript(&body) {
            Ok(messages) => messages,
            Err(e) => {
                error!(error = %e, body_len = body.len(), "Rejected chat request");
                return apology_response();
            }
        };

        info!(messages = messages.len(), "Chat request received");
        let reply = state.orchestrator.respond(&messages).await;

        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                (
                    HeaderName::from_static(CATEGORY_HEADER),
                    reply.classification.category.to_string(),
                ),
                (
                    HeaderName::from_static(INTENT_HEADER),
                    reply.classification.intent.to_string(),
                ),
            ],
            reply.text,
        )
            .into_response()
    }
    .instrument(span)
    .await
}

// =============================================================================
// Products
// =============================================================================

/// GET /api/products - search the configured catalog.
pub async fn products(
    State(state): State<AppState>,
    Query(params): Query<ProductsParams>,
) -> Result<Json<CatalogPage>, ApiError> {
    let settings = &state.config.catalog;
    let query = build_query(&params, settings.default_limit, settings.max_limit)?;
    let page = state.catalog.search(&query).await.map_err(|e| {
        warn!(error = %e, "Product search failed");
        e
    })?;
    Ok(Json(page))
}

/// Validate raw product parameters into a catalog query.
///
/// `limit` is clamped to `1..=max_limit`; `inStock` is only true for the
/// literal string "true".
pub fn build_query(
    params: &ProductsParams,
    default_limit: usize,
    max_limit: usize,
) -> Result<CatalogQuery, ApiError> {
    let limit: usize = parse_param("limit", params.limit.as_deref())?.unwrap_or(default_limit);

    Ok(CatalogQuery {
        q: params.q.clone().filter(|q| !q.trim().is_empty()),
        category: params.category.clone().filter(|c| !c.is_empty()),
        min_price: parse_param("minPrice", params.min_price.as_deref())?,
        max_price: parse_param("maxPrice", params.max_price.as_deref())?,
        in_stock: params.in_stock.as_deref() == Some("true"),
        limit: limit.min(max_limit).max(1),
        offset: parse_param("offset", params.offset.as_deref())?.unwrap_or(0),
    })
}

fn parse_param<T: FromStr>(name: &str, value: Option<&str>) -> Result<Option<T>, ApiError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| {
            ApiError::BadRequest(format!("Invalid value '{}' for parameter '{}'", raw, name))
        }),
    }
}

/// GET /api/products/categories - the fixed store category list.
pub async fn categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: CATEGORIES.iter().map(|c| c.to_string()).collect(),
    })
}

// =============================================================================
// Health
// =============================================================================

/// GET /health - liveness and basic stats.
///
/// The catalog size comes from an empty-page search, so an unreachable
/// catalog reports 503.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let count_only = CatalogQuery::default().with_limit(0);
    let catalog_size = state.catalog.search(&count_only).await?.total;
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        catalog_size,
    }))
}
