//! Configuration loading and constants.
//!
//! Defines the connector endpoint constants, logging defaults, and the
//! optional TOML configuration file. `DemoConfig` is the root configuration
//! struct; every section has a default so a missing file means stock behavior.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Connector Endpoints
// =============================================================================

/// Host and port the connector listens on when nothing overrides it
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 3000;

/// Base URL assembled at compile time
pub const DEFAULT_BASE_URL: &str = formatcp!("http://{}:{}", DEFAULT_HOST, DEFAULT_PORT);

/// Vector insertion path
pub const INSERT_PATH: &str = "/vectors/insert";

/// Liveness probe path
pub const HEALTH_PATH: &str = "/health";

// =============================================================================
// Demo Payload
// =============================================================================

/// Record id sent by the insert demo
pub const DEMO_VECTOR_ID: i64 = 1;

/// Embedding sent by the insert demo
pub const DEMO_VECTOR: [f64; 4] = [0.12, 0.55, 0.33, 0.91];

// =============================================================================
// Console Labels
// =============================================================================

pub const INSERT_LABEL: &str = "Insert Response:";
pub const HEALTH_LABEL: &str = "Health Check:";
pub const ERROR_LABEL: &str = "❌ Error:";

// =============================================================================
// Logging
// =============================================================================

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "connector_demos=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoConfig {
    /// Connector endpoint settings
    #[serde(default)]
    pub connector: ConnectorConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the connector service lives
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectorConfig {
    #[serde(default = "ConnectorConfig::default_base_url")]
    pub base_url: String,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
        }
    }
}

impl ConnectorConfig {
    fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl DemoConfig {
    /// Load from a TOML file and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// Priority for the base URL: explicit override > file > default.
    pub fn resolve(
        path: Option<&Path>,
        base_url_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(url) = base_url_override {
            config.connector.base_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = self.connector.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::Validation(
                "connector.base_url must not be empty".to_string(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "connector.base_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        match self.logging.format.to_ascii_lowercase().as_str() {
            "text" | "json" => Ok(()),
            other => Err(ConfigError::Validation(format!(
                "logging.format must be \"text\" or \"json\", got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
