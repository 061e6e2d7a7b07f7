use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

/// Top-level configuration for the ShopBot service.
///
/// Loaded from `~/.shopbot/config.toml` by default. Every section is optional
/// in the file; missing keys take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopbotConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl ShopbotConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ShopbotConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// Server and process settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Interface the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server listens on.
    pub port: u16,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
            log_level: "info".to_string(),
        }
    }
}

/// Conversation pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// How many trailing messages the context analyzer inspects.
    pub context_window: usize,
    /// How many products a chat-driven search asks the catalog for.
    pub page_size: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            context_window: 6,
            page_size: 5,
        }
    }
}

/// Product catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL of a remote catalog service. When unset the in-process
    /// catalog is used.
    pub base_url: Option<String>,
    /// Request timeout for the remote catalog, in seconds.
    pub timeout_secs: u64,
    /// Page size for `/api/products` when the caller gives no limit.
    pub default_limit: usize,
    /// Upper bound on `/api/products` page size.
    pub max_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 10,
            default_limit: 20,
            max_limit: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShopbotError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = ShopbotConfig::default();
        assert_eq!(config.general.host, "127.0.0.1");
        assert_eq!(config.general.port, 3030);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.context_window, 6);
        assert_eq!(config.chat.page_size, 5);
        assert!(config.catalog.base_url.is_none());
        assert_eq!(config.catalog.timeout_secs, 10);
        assert_eq!(config.catalog.default_limit, 20);
        assert_eq!(config.catalog.max_limit, 100);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
host = "0.0.0.0"
port = 8080
log_level = "debug"

[chat]
context_window = 10
page_size = 3

[catalog]
base_url = "http://catalog.internal:9000"
timeout_secs = 2
"#;
        let file = create_temp_config(content);
        let config = ShopbotConfig::load(file.path()).unwrap();
        assert_eq!(config.general.host, "0.0.0.0");
        assert_eq!(config.general.port, 8080);
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.chat.context_window, 10);
        assert_eq!(config.chat.page_size, 3);
        assert_eq!(
            config.catalog.base_url.as_deref(),
            Some("http://catalog.internal:9000")
        );
        assert_eq!(config.catalog.timeout_secs, 2);
        assert_eq!(config.catalog.max_limit, 100);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[general]
log_level = "warn"
"#;
        let file = create_temp_config(content);
        let config = ShopbotConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.general.port, 3030);
        assert_eq!(config.chat.context_window, 6);
        assert!(config.catalog.base_url.is_none());
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let file = create_temp_config("[general\nport = ");
        let err = ShopbotConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ShopbotError::Config(_)));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = ShopbotConfig::load_or_default(Path::new("/nonexistent/shopbot.toml"));
        assert_eq!(config.general.port, 3030);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ShopbotConfig::default();
        config.general.port = 4000;
        config.catalog.base_url = Some("http://localhost:4001".to_string());
        config.save(&path).unwrap();

        let reloaded = ShopbotConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.port, 4000);
        assert_eq!(reloaded.catalog.base_url, config.catalog.base_url);
        assert_eq!(reloaded.chat.page_size, config.chat.page_size);
    }
}
