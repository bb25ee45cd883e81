//! Request logger configuration
//!
//! Loaded once at startup (environment or JSON file), validated, then handed
//! to [`LoggingInterceptor::new`](crate::LoggingInterceptor::new).

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::error::ConfigError;
use crate::formatter::MAX_BODY_LENGTH;

pub const ENV_IGNORED_PATHS_EXACT: &str = "REQUEST_LOGGER_IGNORED_PATHS_EXACT";
pub const ENV_IGNORED_PATHS_STARTSWITH: &str = "REQUEST_LOGGER_IGNORED_PATHS_STARTSWITH";
pub const ENV_MAX_BODY_LENGTH: &str = "REQUEST_LOGGER_MAX_BODY_LENGTH";
pub const ENV_COLORIZE: &str = "REQUEST_LOGGER_COLORIZE";

/// Request logger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestLoggerConfig {
    /// Paths that are never logged (exact match, query string included)
    pub ignored_paths_exact: Vec<String>,
    /// Path prefixes that are never logged
    pub ignored_paths_startswith: Vec<String>,
    /// Bodies longer than this many bytes are cut and marked
    pub max_body_length: usize,
    /// Wrap lines in ANSI colors (cyan for info, magenta for error).
    ///
    /// Only for sinks that write raw text to a terminal. `tracing` formatters
    /// escape escape sequences inside messages and color by level already.
    pub colorize: bool,
}

impl Default for RequestLoggerConfig {
    fn default() -> Self {
        Self {
            ignored_paths_exact: Vec::new(),
            ignored_paths_startswith: Vec::new(),
            max_body_length: MAX_BODY_LENGTH,
            colorize: false,
        }
    }
}

impl RequestLoggerConfig {
    pub fn with_ignored_exact<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_paths_exact = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ignored_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_paths_startswith = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_body_length(mut self, max_body_length: usize) -> Self {
        self.max_body_length = max_body_length;
        self
    }

    pub fn with_colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Check the settings once before they are frozen into an interceptor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_length == 0 {
            return Err(ConfigError::InvalidBodyLimit);
        }

        if self.ignored_paths_startswith.iter().any(|p| p.is_empty()) {
            warn!("[RequestLogger] Empty ignored path prefix configured: every path will be exempt");
        }

        Ok(())
    }

    /// Load from the process environment, keeping defaults for unset keys
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key/value lookup using the `REQUEST_LOGGER_*` keys.
    ///
    /// Path lists are comma-separated; entries are trimmed and empty entries dropped.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_IGNORED_PATHS_EXACT) {
            config.ignored_paths_exact = split_list(&value);
        }
        if let Some(value) = lookup(ENV_IGNORED_PATHS_STARTSWITH) {
            config.ignored_paths_startswith = split_list(&value);
        }
        if let Some(value) = lookup(ENV_MAX_BODY_LENGTH) {
            config.max_body_length = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_MAX_BODY_LENGTH.to_string(),
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_COLORIZE) {
            config.colorize = parse_bool(&value).ok_or_else(|| ConfigError::InvalidValue {
                key: ENV_COLORIZE.to_string(),
                value: value.clone(),
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file with the same field names as this struct
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
