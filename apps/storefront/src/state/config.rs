//! # Storefront Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SWEETSHOP_API_BASE_URL=https://shop.example.com                    │
//! │     SWEETSHOP_LOW_STOCK_THRESHOLD=5                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     local backend, ₹, threshold 10                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! api_base_url = "http://127.0.0.1:8000"
//! currency_symbol = "₹"
//! low_stock_threshold = 10
//! catalog_path = "/var/lib/sweetshop/sweets.json"
//! ```
//!
//! Read-only after load, so no lock.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use sweetshop_core::{Money, LOW_STOCK_THRESHOLD};
use thiserror::Error;
use tracing::{debug, info, warn};

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Config
// =============================================================================

/// Storefront settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Backend origin. REST endpoints live under `/api`; media paths are
    /// joined to the origin directly.
    pub api_base_url: String,

    /// Symbol shown in front of prices
    pub currency_symbol: String,

    /// Whole units below which a sweet shows as running low
    pub low_stock_threshold: i64,

    /// Local sweets JSON used by the listing binary
    pub catalog_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            currency_symbol: "₹".to_string(),
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            catalog_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must start with http:// or https://, got: {}",
                self.api_base_url
            )));
        }

        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid("currency_symbol must not be empty".into()));
        }

        if self.low_stock_threshold < 0 {
            return Err(ConfigError::Invalid(
                "low_stock_threshold must not be negative".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SWEETSHOP_API_BASE_URL") {
            debug!(url = %url, "Overriding API base URL from environment");
            self.api_base_url = url;
        }

        if let Ok(symbol) = std::env::var("SWEETSHOP_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Ok(threshold) = std::env::var("SWEETSHOP_LOW_STOCK_THRESHOLD") {
            match threshold.parse::<i64>() {
                Ok(t) => self.low_stock_threshold = t,
                Err(_) => warn!(value = %threshold, "Ignoring non-numeric low stock threshold"),
            }
        }

        if let Ok(path) = std::env::var("SWEETSHOP_CATALOG_PATH") {
            self.catalog_path = Some(PathBuf::from(path));
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sweetshop", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Full URL of a REST endpoint, e.g. `"/sweets/"`.
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}/api{}", self.api_base_url.trim_end_matches('/'), endpoint)
    }

    /// Origin relative image paths are resolved against.
    pub fn media_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// Formats an amount with the configured symbol: `₹880.00`.
    pub fn format_money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let minor = amount.minor().abs();
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            minor / 100,
            minor % 100
        )
    }
}
