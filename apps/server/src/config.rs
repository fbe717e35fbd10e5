//! Server configuration.
//!
//! Configuration is layered: built-in defaults, then an optional
//! `config/default.toml`, then `SHAKER__`-prefixed environment variables
//! (`SHAKER__SERVER__PORT=8080`, `SHAKER__REDIS__URL=...`). A `.env` file
//! is loaded into the process environment first, if present.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub redis: RedisConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind, hostname or IP.
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins. Empty means no cross-origin access.
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Page size when the client sends no `per_page`.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Hard cap on `per_page`; larger requests are clamped, not rejected.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    #[serde(default = "default_redis_url")]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter, overridable via `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON-formatted logs instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
    /// When set, also write daily-rotated log files into this directory.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_page_size() -> usize {
    20
}

fn default_max_page_size() -> usize {
    100
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            directory: None,
        }
    }
}

impl Config {
    /// Load configuration from defaults, optional file, and environment.
    pub fn load() -> anyhow::Result<Self> {
        // Populate the process environment from .env before reading it.
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("SHAKER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.server.default_page_size == 0 {
            return Err("server.default_page_size must be at least 1".to_string());
        }
        if self.server.max_page_size < self.server.default_page_size {
            return Err(
                "server.max_page_size must not be smaller than server.default_page_size"
                    .to_string(),
            );
        }
        if !self.redis.url.starts_with("redis://") && !self.redis.url.starts_with("rediss://") {
            return Err(format!(
                "redis.url must be a redis:// or rediss:// URL, got: {}",
                self.redis.url
            ));
        }
        Ok(())
    }

    /// Address string passed to the TCP listener (supports hostnames).
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.default_page_size, 20);
        assert_eq!(config.server.max_page_size, 100);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.redis.url, "redis://127.0.0.1:6379");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut config = Config::default();
        config.server.default_page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cap_below_default_rejected() {
        let mut config = Config::default();
        config.server.max_page_size = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_redis_url_rejected() {
        let mut config = Config::default();
        config.redis.url = "http://localhost:6379".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_listen_addr() {
        let config = Config::default();
        assert_eq!(config.listen_addr(), "127.0.0.1:3001");
    }
}
