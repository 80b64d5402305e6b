//! Client configuration management
//!
//! Configuration is resolved once at startup. The only value of substance is
//! the backend base URL; everything else the client needs ships as constants.

use std::env;

use crate::constants::DEFAULT_API_BASE_URL;

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API, without a trailing slash
    pub api_base_url: String,
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        let api_base_url = env::var("POTM_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Self::with_base_url(api_base_url)
    }

    /// Build a configuration for an explicit base URL
    pub fn with_base_url(url: impl Into<String>) -> Result<Self, ConfigError> {
        let mut api_base_url: String = url.into();

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue("POTM_API_URL".to_string()));
        }

        while api_base_url.ends_with('/') {
            api_base_url.pop();
        }

        Ok(Self { api_base_url })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
