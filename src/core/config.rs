//! Configuration management for the MCP server.
//!
//! All settings come from the process environment (optionally via a `.env`
//! file). Credentials are required; the server refuses to start without
//! them rather than failing on the first tool call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MILKEE_API_TOKEN environment variable is required")]
    MissingApiToken,

    #[error("MILKEE_COMPANY_ID environment variable is required")]
    MissingCompanyId,
}

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// MILKEE API credentials.
    pub credentials: CredentialsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// When set, only read-only tools are advertised and callable.
    pub read_only: bool,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// MILKEE API credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Personal access token, created in the MILKEE web app settings.
    pub api_token: String,

    /// Company the token is scoped to; every request path embeds it.
    pub company_id: String,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_token", &"[REDACTED]")
            .field("company_id", &self.company_id)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `MILKEE_API_TOKEN` and `MILKEE_COMPANY_ID` are required;
    /// `MILKEE_READ_ONLY` and `MILKEE_LOG_LEVEL` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_token =
            std::env::var("MILKEE_API_TOKEN").map_err(|_| ConfigError::MissingApiToken)?;
        let company_id =
            std::env::var("MILKEE_COMPANY_ID").map_err(|_| ConfigError::MissingCompanyId)?;

        let read_only = std::env::var("MILKEE_READ_ONLY")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let level = std::env::var("MILKEE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            server: ServerConfig {
                name: "milkee-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            credentials: CredentialsConfig {
                api_token,
                company_id,
            },
            logging: LoggingConfig { level },
            read_only,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn set_required_vars() {
        unsafe {
            std::env::set_var("MILKEE_API_TOKEN", "test_token_12345");
            std::env::set_var("MILKEE_COMPANY_ID", "42");
        }
    }

    fn clear_vars() {
        unsafe {
            std::env::remove_var("MILKEE_API_TOKEN");
            std::env::remove_var("MILKEE_COMPANY_ID");
            std::env::remove_var("MILKEE_READ_ONLY");
            std::env::remove_var("MILKEE_LOG_LEVEL");
        }
    }

    #[test]
    fn test_from_env_requires_token() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("MILKEE_COMPANY_ID", "42");
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiToken));
        clear_vars();
    }

    #[test]
    fn test_from_env_requires_company_id() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("MILKEE_API_TOKEN", "test_token_12345");
        }
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingCompanyId));
        clear_vars();
    }

    #[test]
    fn test_from_env_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        set_required_vars();
        let config = Config::from_env().unwrap();
        assert_eq!(config.credentials.company_id, "42");
        assert!(!config.read_only);
        assert_eq!(config.logging.level, "info");
        clear_vars();
    }

    #[test]
    fn test_read_only_flag_parsing() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        set_required_vars();
        unsafe {
            std::env::set_var("MILKEE_READ_ONLY", "true");
        }
        assert!(Config::from_env().unwrap().read_only);
        unsafe {
            std::env::set_var("MILKEE_READ_ONLY", "0");
        }
        assert!(!Config::from_env().unwrap().read_only);
        clear_vars();
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            api_token: "super_secret_token".to_string(),
            company_id: "42".to_string(),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
        assert!(debug_str.contains("42"));
    }
}
