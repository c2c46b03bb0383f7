//! Application configuration baked in at build time.
//!
//! The browser has no process environment, so values are captured with
//! `option_env!` when the WASM bundle is compiled (`API_BASE_URL=... trunk
//! build`). `from_lookup` carries the parsing so it can be exercised natively.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;
pub const DEFAULT_MOCK_LATENCY_MS: u32 = 800;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
    #[error("LOG_LEVEL must be one of error, warn, info, debug, trace; got {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL every API path is appended to, without a trailing slash.
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    /// Use the in-browser fake auth boundary instead of the HTTP API.
    pub mock_auth: bool,
    /// Simulated latency of the fake auth boundary.
    pub mock_latency_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            mock_auth: true,
            mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// Optional:
    /// - `API_BASE_URL`: default `http://localhost:3000/api`
    /// - `API_TIMEOUT_MS`: default 10000
    /// - `MOCK_AUTH`: `true` (default) or `false`
    /// - `MOCK_LATENCY_MS`: default 800
    /// - `LOG_LEVEL`: default `info`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "API_BASE_URL" => option_env!("API_BASE_URL"),
                "API_TIMEOUT_MS" => option_env!("API_TIMEOUT_MS"),
                "MOCK_AUTH" => option_env!("MOCK_AUTH"),
                "MOCK_LATENCY_MS" => option_env!("MOCK_LATENCY_MS"),
                "LOG_LEVEL" => option_env!("LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let api_base_url = get("API_BASE_URL")
            .map_or(defaults.api_base_url, |url| url.trim_end_matches('/').to_owned());
        let request_timeout_ms = match get("API_TIMEOUT_MS") {
            Some(raw) => parse_millis("API_TIMEOUT_MS", &raw)?,
            None => defaults.request_timeout_ms,
        };
        let mock_auth = match get("MOCK_AUTH") {
            Some(raw) => parse_flag("MOCK_AUTH", &raw)?,
            None => defaults.mock_auth,
        };
        let mock_latency_ms = match get("MOCK_LATENCY_MS") {
            Some(raw) => parse_millis("MOCK_LATENCY_MS", &raw)?,
            None => defaults.mock_latency_ms,
        };
        let log_level = match get("LOG_LEVEL") {
            Some(raw) => raw.parse::<log::Level>().map_err(|_| ConfigError::InvalidLogLevel(raw))?,
            None => defaults.log_level,
        };

        Ok(Self { api_base_url, request_timeout_ms, mock_auth, mock_latency_ms, log_level })
    }
}

fn parse_millis(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { var, value: raw.to_owned() }),
    }
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value: raw.to_owned() }),
    }
}
