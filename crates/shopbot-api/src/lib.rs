//! ShopBot API crate - axum HTTP server and route handlers.
//!
//! Serves the chat endpoint, the product search and category endpoints, and a
//! health check.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
