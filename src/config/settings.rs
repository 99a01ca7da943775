//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic for the GHIN client.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default service endpoint
pub const DEFAULT_BASE_URL: &str = "https://api2.ghin.com/api/v1/";

/// Main configuration settings for the GHIN client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Service endpoint configuration
    pub api: ApiSettings,
    /// Login credentials
    pub credentials: CredentialSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Service endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User agent override; the crate version is used when unset
    pub user_agent: Option<String>,
}

/// Login credentials
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialSettings {
    pub email: Option<String>,
    pub password: Option<String>,
}

// Keep the password out of debug logs.
impl std::fmt::Debug for CredentialSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSettings")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            verbose: false,
        }
    }
}

impl ApiSettings {
    /// Request timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl CredentialSettings {
    /// Both halves of the login, if configured
    pub fn pair(&self) -> Option<(&str, &str)> {
        Some((self.email.as_deref()?, self.password.as_deref()?))
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Apply environment variable overrides
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(base_url) = std::env::var("GHIN_BASE_URL") {
            self.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("GHIN_TIMEOUT_SECS") {
            self.api.timeout_secs = timeout
                .parse()
                .map_err(|e| crate::Error::config(format!("Invalid timeout: {}", e)))?;
        }

        if let Ok(email) = std::env::var("GHIN_EMAIL") {
            self.credentials.email = Some(email);
        }

        if let Ok(password) = std::env::var("GHIN_PASSWORD") {
            self.credentials.password = Some(password);
        }

        if let Ok(level) = std::env::var("GHIN_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(self)
    }

    /// Check that the settings can produce a working client
    pub fn validate(&self) -> crate::Result<()> {
        let url = url::Url::parse(&self.api.base_url)
            .map_err(|e| crate::Error::config(format!("Invalid base URL: {}", e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(crate::Error::config(format!(
                "Unsupported base URL scheme: {}",
                url.scheme()
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(crate::Error::config("Timeout must be greater than zero"));
        }

        Ok(())
    }
}
