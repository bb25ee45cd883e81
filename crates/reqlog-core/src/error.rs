//! Error types for configuration and log sinks

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a [`RequestLoggerConfig`](crate::RequestLoggerConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("max_body_length must be greater than zero")]
    InvalidBodyLimit,

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors a [`LogSink`](crate::LogSink) may report for a single line
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("log sink unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write log line: {0}")]
    Write(#[from] std::io::Error),
}
