//! LearnPortal Configuration System
//!
//! TOML-based configuration with environment variable override support.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use url::Url;

mod loader;

pub use loader::ConfigLoader;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Page size used when exhausting server-side pagination
    pub fetch_page_size: u32,

    /// Default login username (the portal is provisioned per staff account)
    pub username: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost:5001".to_string(),
            timeout_secs: 30,
            fetch_page_size: 1000,
            username: String::new(),
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Path of the session file. Empty means the per-user data directory.
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            file: String::new(),
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Rows per rendered page
    pub page_size: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with environment variable override
    pub fn load() -> Result<Self, ConfigError> {
        let loader = ConfigLoader::new();
        loader.load()
    }

    /// Validate the configuration. Startup aborts on the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "api.base_url is required".to_string(),
            ));
        }
        Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::ValidationError(format!(
                "api.base_url is not a valid URL: {}",
                e
            ))
        })?;
        if self.api.fetch_page_size == 0 {
            return Err(ConfigError::ValidationError(
                "api.fetch_page_size must be greater than zero".to_string(),
            ));
        }
        if self.ui.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "ui.page_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Generate an example TOML configuration
    pub fn example_toml() -> String {
        r#"# LearnPortal Configuration
# Environment variables override these settings

[api]
base_url = "https://localhost:5001"
timeout_secs = 30
fetch_page_size = 1000
username = "staff@example.edu"

[session]
# Defaults to the per-user data directory when empty
file = ""

[ui]
page_size = 10
"#
        .to_string()
    }
}
