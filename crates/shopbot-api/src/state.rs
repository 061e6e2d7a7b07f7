//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use shopbot_catalog::{InMemoryCatalog, ProductCatalog};
use shopbot_chat::ChatOrchestrator;
use shopbot_core::ShopbotConfig;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks. Nothing here
/// is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<ShopbotConfig>,
    /// Catalog behind `/api/products` and the health check.
    pub catalog: Arc<dyn ProductCatalog>,
    /// Chat pipeline.
    pub orchestrator: Arc<ChatOrchestrator>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create state whose chat pipeline searches `chat_catalog`.
    pub fn new(
        config: ShopbotConfig,
        catalog: Arc<dyn ProductCatalog>,
        chat_catalog: Arc<dyn ProductCatalog>,
    ) -> Self {
        let orchestrator = ChatOrchestrator::with_settings(
            chat_catalog,
            config.chat.context_window,
            config.chat.page_size,
        );
        Self {
            config: Arc::new(config),
            catalog,
            orchestrator: Arc::new(orchestrator),
            start_time: Instant::now(),
        }
    }

    /// Create state where chat searches the same in-process catalog that
    /// `/api/products` serves.
    pub fn in_process(config: ShopbotConfig, catalog: InMemoryCatalog) -> Self {
        let catalog: Arc<dyn ProductCatalog> = Arc::new(catalog);
        Self::new(config, catalog.clone(), catalog)
    }
}
