//! Application configuration.
//!
//! Configuration is stored in `config.yaml` under the platform config directory
//! (or wherever `TURNSTILE_CONFIG` points) and includes:
//! - Base URL of the ticket service and an optional bearer token
//! - Currency symbol used when rendering amounts
//! - Request timeout for remote calls

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, TurnstileError};
use crate::formatting::DEFAULT_CURRENCY_SYMBOL;

pub const API_URL_ENV: &str = "TURNSTILE_API_URL";
pub const API_TOKEN_ENV: &str = "TURNSTILE_API_TOKEN";

pub const DEFAULT_API_URL: &str = "http://localhost:3000";

pub const VALID_CONFIG_KEYS: &[&str] =
    &["api_url", "api_token", "currency_symbol", "remote_timeout"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the ticket service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<ApiToken>,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Remote operation timeout in seconds (default: 30)
    #[serde(default = "default_remote_timeout")]
    pub remote_timeout: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_remote_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: None,
            currency_symbol: default_currency_symbol(),
            remote_timeout: default_remote_timeout(),
        }
    }
}

/// Stored API token
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiToken(String);

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        crate::paths::config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            TurnstileError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                TurnstileError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            TurnstileError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Set restrictive permissions on Unix (owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&path, permissions)?;
        }

        Ok(())
    }

    /// Effective API URL: environment variable first, then the config file
    pub fn api_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }
        self.api_url.clone()
    }

    /// Parsed and validated base URL of the ticket service
    pub fn api_base_url(&self) -> Result<Url> {
        parse_api_url(&self.api_url())
    }

    /// Effective API token: environment variable first, then the config file
    pub fn api_token(&self) -> Option<SecretString> {
        if let Ok(token) = env::var(API_TOKEN_ENV)
            && !token.is_empty()
        {
            return Some(SecretString::from(token));
        }
        self.api_token
            .as_ref()
            .map(|t| SecretString::from(t.0.clone()))
    }

    pub fn set_api_token(&mut self, token: String) {
        self.api_token = Some(ApiToken(token));
    }

    /// Get the remote operation timeout duration
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout)
    }

    /// Look up a value by key name. `api_token` is returned unmasked; callers
    /// that print it are expected to mask it.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        use secrecy::ExposeSecret;

        match key {
            "api_url" => Ok(Some(self.api_url())),
            "api_token" => Ok(self.api_token().map(|t| t.expose_secret().to_string())),
            "currency_symbol" => Ok(Some(self.currency_symbol.clone())),
            "remote_timeout" => Ok(Some(self.remote_timeout.to_string())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Validate and store a value by key name
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_url" => {
                parse_api_url(value)?;
                self.api_url = value.trim().to_string();
            }
            "api_token" => {
                let token = value.trim();
                if token.is_empty() {
                    return Err(TurnstileError::Config(
                        "api_token cannot be empty".to_string(),
                    ));
                }
                self.set_api_token(token.to_string());
            }
            "currency_symbol" => {
                self.currency_symbol = value.to_string();
            }
            "remote_timeout" => {
                self.remote_timeout = value
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| {
                        TurnstileError::Config(format!(
                            "invalid value '{value}' for remote_timeout. Expected a positive number of seconds"
                        ))
                    })?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> TurnstileError {
    TurnstileError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_CONFIG_KEYS.join(", ")
    ))
}

fn parse_api_url(value: &str) -> Result<Url> {
    let url = Url::parse(value.trim())
        .map_err(|e| TurnstileError::Config(format!("invalid api_url '{value}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(TurnstileError::Config(format!(
            "invalid api_url '{value}': expected an http or https URL"
        )));
    }
    Ok(url)
}
