//! ShopBot application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize logging
//! 3. Pick the catalog the chat pipeline searches (remote or built-in)
//! 4. Start the axum HTTP server

mod cli;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use shopbot_api::{start_server, AppState};
use shopbot_catalog::{HttpCatalogClient, InMemoryCatalog, ProductCatalog};
use shopbot_core::config::CatalogConfig;
use shopbot_core::ShopbotConfig;

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let mut config = ShopbotConfig::load_or_default(&config_file);
    config.general.port = args.resolve_port(config.general.port);
    config.general.host = args.resolve_host(&config.general.host);
    config.general.log_level = args.resolve_log_level(&config.general.log_level);
    config.catalog.base_url = args.resolve_catalog_url(config.catalog.base_url.as_deref());

    // Tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting ShopBot v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    let builtin = InMemoryCatalog::seeded();
    tracing::info!(products = builtin.len(), "Built-in catalog loaded");
    let catalog: Arc<dyn ProductCatalog> = Arc::new(builtin);
    let chat_catalog = build_chat_catalog(&config.catalog, catalog.clone())?;

    let host = config.general.host.clone();
    let port = config.general.port;
    let state = AppState::new(config, catalog, chat_catalog);

    start_server(state, &host, port).await?;

    Ok(())
}

/// Pick the catalog chat searches run against: the remote one when a base
/// URL is configured, the built-in one otherwise.
fn build_chat_catalog(
    settings: &CatalogConfig,
    builtin: Arc<dyn ProductCatalog>,
) -> shopbot_core::Result<Arc<dyn ProductCatalog>> {
    let Some(url) = settings.base_url.as_deref() else {
        return Ok(builtin);
    };

    let timeout = Duration::from_secs(settings.timeout_secs);
    let client = HttpCatalogClient::new(url, timeout).map_err(|e| {
        tracing::error!(url, error = %e, "Failed to create catalog client");
        e
    })?;
    tracing::info!(url = client.base_url(), "Chat searches use remote catalog");
    Ok(Arc::new(client))
}
