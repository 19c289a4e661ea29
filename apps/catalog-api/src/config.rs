//! # Catalog API Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Load Order (later overrides earlier)                 │
//! │                                                                         │
//! │  1. Defaults            ServerSettings / CatalogSettings / Logging      │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  2. catalog.toml        $CATALOG_CONFIG, else the platform config dir   │
//! │          │              (missing file is fine)                          │
//! │          ▼                                                              │
//! │  3. Environment         CATALOG_BIND_ADDR, CATALOG_PORT,                │
//! │                         CATALOG_DEFAULT_PAGE_LIMIT, CATALOG_SEED,       │
//! │                         CATALOG_LOG_LEVEL                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # catalog.toml
//! [server]
//! bind_addr = "0.0.0.0"
//! port = 8080
//!
//! [catalog]
//! default_page_limit = 5
//! seed_on_startup = true
//!
//! [logging]
//! level = "info"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use catalog_core::DEFAULT_PAGE_LIMIT;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CATALOG_CONFIG";

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Server Settings
// =============================================================================

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind address (default: 0.0.0.0 for all interfaces).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

// =============================================================================
// Catalog Settings
// =============================================================================

/// Catalog behavior settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Page size used when a listing request gives no usable `limit`.
    #[serde(default = "default_page_limit")]
    pub default_page_limit: usize,

    /// Load the built-in products at startup.
    #[serde(default = "default_true")]
    pub seed_on_startup: bool,
}

fn default_page_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

fn default_true() -> bool {
    true
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            default_page_limit: default_page_limit(),
            seed_on_startup: true,
        }
    }
}

// =============================================================================
// Logging Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: default_log_level(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl CatalogConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`catalog.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading catalog config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; absent sections and keys keep their defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `CATALOG_*` overrides read through `lookup`.
    ///
    /// Unparsable numeric or boolean values are rejected rather than ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("CATALOG_BIND_ADDR") {
            debug!(addr = %addr, "Overriding bind address from environment");
            self.server.bind_addr = addr;
        }

        if let Some(port) = lookup("CATALOG_PORT") {
            self.server.port = parse_value("CATALOG_PORT", &port)?;
            debug!(port = self.server.port, "Overriding port from environment");
        }

        if let Some(limit) = lookup("CATALOG_DEFAULT_PAGE_LIMIT") {
            self.catalog.default_page_limit = parse_value("CATALOG_DEFAULT_PAGE_LIMIT", &limit)?;
        }

        if let Some(seed) = lookup("CATALOG_SEED") {
            self.catalog.seed_on_startup = parse_value("CATALOG_SEED", &seed)?;
        }

        if let Some(level) = lookup("CATALOG_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.bind_addr.trim().is_empty() {
            return Err(ConfigError::Invalid("bind_addr must not be empty".into()));
        }

        if self.catalog.default_page_limit == 0 {
            return Err(ConfigError::Invalid(
                "default_page_limit must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// `bind_addr:port`, suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.bind_addr, self.server.port)
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "catalog", "catalog-api")
            .map(|dirs| dirs.config_dir().join("catalog.toml"))
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> ConfigResult<T> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}
