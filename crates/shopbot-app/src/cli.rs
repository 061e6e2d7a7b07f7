//! CLI argument definitions for the ShopBot server.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// ShopBot - a rule-based shopping assistant served over HTTP.
#[derive(Parser, Debug)]
#[command(name = "shopbot", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// API server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Interface to bind.
    #[arg(long = "host")]
    pub host: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Base URL of a remote product catalog. Without it the built-in
    /// catalog answers searches.
    #[arg(long = "catalog-url")]
    pub catalog_url: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > SHOPBOT_CONFIG env var > ~/.shopbot/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("SHOPBOT_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the API server port.
    ///
    /// Priority: --port flag > SHOPBOT_PORT env var > config file value > 3030.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        if let Some(p) = self.port {
            return p;
        }
        if let Ok(val) = std::env::var("SHOPBOT_PORT") {
            if let Ok(p) = val.parse::<u16>() {
                return p;
            }
        }
        if config_port != 0 {
            return config_port;
        }
        3030
    }

    /// Priority: --host flag > config file value.
    pub fn resolve_host(&self, config_host: &str) -> String {
        self.host
            .clone()
            .unwrap_or_else(|| config_host.to_string())
    }

    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }

    /// Resolve the remote catalog URL, if any.
    ///
    /// Priority: --catalog-url flag > SHOPBOT_CATALOG_URL env var > config
    /// file value. Blank values count as unset.
    pub fn resolve_catalog_url(&self, config_url: Option<&str>) -> Option<String> {
        self.catalog_url
            .clone()
            .or_else(|| std::env::var("SHOPBOT_CATALOG_URL").ok())
            .or_else(|| config_url.map(str::to_string))
            .filter(|url| !url.trim().is_empty())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".shopbot").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".shopbot").join("config.toml");
    }
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("shopbot").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_all_flags() {
        let args = parse(&[
            "-c",
            "/tmp/shop.toml",
            "-p",
            "8080",
            "--host",
            "0.0.0.0",
            "-l",
            "debug",
            "--catalog-url",
            "http://catalog:9000",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/shop.toml")));
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.catalog_url.as_deref(), Some("http://catalog:9000"));
    }

    #[test]
    fn test_flags_take_priority() {
        let args = parse(&["--config", "/etc/shopbot.toml", "--port", "9999"]);
        assert_eq!(args.resolve_config_path(), PathBuf::from("/etc/shopbot.toml"));
        assert_eq!(args.resolve_port(3030), 9999);

        let args = parse(&["--catalog-url", "http://a"]);
        assert_eq!(
            args.resolve_catalog_url(Some("http://b")).as_deref(),
            Some("http://a")
        );
    }

    #[test]
    fn test_config_values_used_without_flags() {
        let args = parse(&[]);
        assert_eq!(args.resolve_host("127.0.0.1"), "127.0.0.1");
        assert_eq!(args.resolve_log_level("warn"), "warn");

        let args = parse(&["--host", "::1", "-l", "trace"]);
        assert_eq!(args.resolve_host("127.0.0.1"), "::1");
        assert_eq!(args.resolve_log_level("warn"), "trace");
    }

    #[test]
    fn test_blank_catalog_url_is_unset() {
        let args = parse(&["--catalog-url", "  "]);
        assert_eq!(args.resolve_catalog_url(Some("http://b")), None);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = CliArgs::try_parse_from(["shopbot", "--port", "99999"]);
        assert!(result.is_err());
    }
}
