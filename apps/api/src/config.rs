//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so `cargo run` works with nothing set.

use std::env;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default TCP port the API listens on.
const DEFAULT_PORT: u16 = 4000;

/// Default shop name used for QR sessions when the caller omits one.
const DEFAULT_SHOP_NAME: &str = "PrintZplus Demo Shop";

/// Default delay before a dispatched job flips from printing to completed.
const DEFAULT_PRINT_DELAY_MS: u64 = 3000;

/// API server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// HTTP server port
    pub port: u16,

    /// Shop name presented on QR sessions issued without an explicit name
    pub shop_name: String,

    /// Milliseconds between print dispatch and automatic completion
    pub print_delay_ms: u64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Recognized Variables
    /// - `PRINTZ_API_PORT` (default 4000)
    /// - `PRINTZ_SHOP_NAME` (default "PrintZplus Demo Shop")
    /// - `PRINTZ_PRINT_DELAY_MS` (default 3000)
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            port: env::var("PRINTZ_API_PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PRINTZ_API_PORT".to_string()))?,

            shop_name: env::var("PRINTZ_SHOP_NAME")
                .unwrap_or_else(|_| DEFAULT_SHOP_NAME.to_string()),

            print_delay_ms: env::var("PRINTZ_PRINT_DELAY_MS")
                .unwrap_or_else(|_| DEFAULT_PRINT_DELAY_MS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PRINTZ_PRINT_DELAY_MS".to_string()))?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue("PRINTZ_API_PORT".to_string()));
        }
        if self.shop_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue("PRINTZ_SHOP_NAME".to_string()));
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            port: DEFAULT_PORT,
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            print_delay_ms: DEFAULT_PRINT_DELAY_MS,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for: {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingValue(String),
}
