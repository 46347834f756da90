//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `minigate.toml` in the working directory. Every field has a
//! default except the hub host and token, which must be provided either in
//! the file or through `API_HOST`/`API_TOKEN`. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Upstream hub settings.
    pub hub: HubConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Upstream hub configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// `host:port` of the hub's REST API, without a scheme.
    pub host: String,
    /// Bearer token sent on every hub call.
    pub token: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `minigate.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// hub host or token is still missing after overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("minigate.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("API_HOST") {
            self.hub.host = val;
        }
        if let Ok(val) = std::env::var("API_TOKEN") {
            self.hub.token = val;
        }
        if let Ok(val) = std::env::var("MINIGATE_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("MINIGATE_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("MINIGATE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("MINIGATE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.hub.host.is_empty() {
            return Err(ConfigError::Validation(
                "hub host is required (set API_HOST or [hub] host)".to_string(),
            ));
        }
        if self.hub.token.is_empty() {
            return Err(ConfigError::Validation(
                "hub token is required (set API_TOKEN or [hub] token)".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the hub connection settings for the outbound adapter.
    #[must_use]
    pub fn hub_config(&self) -> minigate_adapter_hub_reqwest::HubConfig {
        minigate_adapter_hub_reqwest::HubConfig {
            host: self.hub.host.clone(),
            token: self.hub.token.clone(),
            timeout: Duration::from_secs(self.hub.timeout_secs),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            token: String::new(),
            timeout_secs: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "minigated=info,minigate=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
