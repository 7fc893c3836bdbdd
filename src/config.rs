use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::constants::{DEFAULT_API_DOMAIN, DEFAULT_HTTP_TIMEOUT_SECONDS};
use crate::error::AppError;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API domain for the scoreboard provider. Includes the scheme.
    pub api_domain: String,
    /// Path to the log file. If not specified, logs go to the default
    /// location under the platform config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for provider requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: DEFAULT_API_DOMAIN.to_string(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, falling
    /// back to built-in defaults when no file exists. Environment
    /// variables override file values.
    ///
    /// # Environment Variables
    /// - `MATCHDAY_API_DOMAIN` - Override API domain
    /// - `MATCHDAY_LOG_FILE` - Override log file path
    /// - `MATCHDAY_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    pub async fn load() -> Result<Self, AppError> {
        let config_path = Self::config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(api_domain) = std::env::var("MATCHDAY_API_DOMAIN") {
            config.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var("MATCHDAY_LOG_FILE") {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var("MATCHDAY_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        if self.api_domain.trim().is_empty() {
            return Err(AppError::config_error("API domain must not be empty"));
        }
        if !self.api_domain.starts_with("http://") && !self.api_domain.starts_with("https://") {
            return Err(AppError::config_error(format!(
                "API domain must include a scheme: {}",
                self.api_domain
            )));
        }
        if self.http_timeout_seconds == 0 {
            return Err(AppError::config_error("HTTP timeout must be at least 1s"));
        }
        Ok(())
    }

    /// Saves the configuration to the default config file location,
    /// creating the directory when needed.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = Self::config_path();
        if let Some(parent) = Path::new(&config_path).parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content).await?;
        Ok(())
    }

    /// Platform-specific config file path
    pub fn config_path() -> String {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir
            .join("matchday")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }

    /// Default directory for log files
    pub fn log_dir_path() -> String {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir
            .join("matchday")
            .join("logs")
            .to_string_lossy()
            .to_string()
    }
}
