//! Startup configuration read from the process environment

use std::{fmt, time::Duration};
use terabox::ApiConfig;

pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const API_KEY_VAR: &str = "RAPIDAPI_KEY";
pub const API_URL_VAR: &str = "TERABOX_API_URL";
pub const API_HOST_VAR: &str = "TERABOX_API_HOST";
pub const TIMEOUT_VAR: &str = "TERABOX_TIMEOUT_SECS";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in the environment or the .env file")]
    Missing(&'static str),
    #[error("{var} has an invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Log output style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Read `LOG_FORMAT`; unset means [`LogFormat::Pretty`]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(LOG_FORMAT_VAR).filter(|value| !value.trim().is_empty()) {
            Some(value) => parse_log_format(&value),
            None => Ok(LogFormat::default()),
        }
    }
}

/// Everything the bot needs, built once at startup
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub api: ApiConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("api", &self.api)
            .finish()
    }
}

impl Config {
    /// Read the configuration from environment variables
    ///
    /// # Errors
    /// Fails if a secret is missing or an optional value does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let bot_token = get(BOT_TOKEN_VAR).ok_or(ConfigError::Missing(BOT_TOKEN_VAR))?;
        let api_key = get(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;

        let mut api = ApiConfig::new(api_key);
        if let Some(url) = get(API_URL_VAR) {
            api.url = url;
        }
        if let Some(host) = get(API_HOST_VAR) {
            api.host = host;
        }
        if let Some(value) = get(TIMEOUT_VAR) {
            api.timeout = parse_timeout(&value)?;
        }

        Ok(Config { bot_token, api })
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid {
            var: TIMEOUT_VAR,
            value: value.to_string(),
        }),
    }
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::Invalid {
            var: LOG_FORMAT_VAR,
            value: value.to_string(),
        }),
    }
}
