//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ORDERGUARD_STRICTNESS` - Default validation strictness (default: weak)
//! - `ORDERGUARD_LOG_JSON` - Emit logs as JSON lines (default: false)
//! - `RUST_LOG` - Log filter (default: info)
//!
//! Command-line flags take precedence over the environment.

use orderguard_core::Strictness;
use thiserror::Error;

const STRICTNESS_VAR: &str = "ORDERGUARD_STRICTNESS";
const LOG_JSON_VAR: &str = "ORDERGUARD_LOG_JSON";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Strictness used when no `--strictness` flag is given
    pub strictness: Strictness,
    /// Whether logs are written as JSON
    pub log_json: bool,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let strictness = lookup(STRICTNESS_VAR)
            .map(|value| {
                value.parse::<Strictness>().map_err(|e| {
                    ConfigError::InvalidEnvVar(STRICTNESS_VAR.to_string(), e.to_string())
                })
            })
            .transpose()?
            .unwrap_or_default();
        let log_json = lookup(LOG_JSON_VAR)
            .map(|value| parse_bool(LOG_JSON_VAR, &value))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            strictness,
            log_json,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got `{other}`"),
        )),
    }
}
