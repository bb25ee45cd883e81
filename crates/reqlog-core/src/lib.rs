//! # Reqlog Core Library
//!
//! Request/response logging pipeline, independent of any web framework.
//!
//! ## Modules
//!
//! - `domain` - Request/response capabilities, severities, log records and configuration
//! - `matcher` - Path exemption (exact and prefix lists)
//! - `formatter` - Body truncation, line rendering and the JSON content-type gate
//! - `sink` - Outbound log sink trait and the `tracing` sink
//! - `interceptor` - The request-entry / response-exit hook pair
//! - `error` - Error types

pub mod domain;
pub mod error;
pub mod formatter;
pub mod interceptor;
pub mod matcher;
pub mod sink;

// Re-export commonly used types
pub use domain::*;
pub use error::{ConfigError, SinkError};
pub use formatter::{
    is_json_content_type, truncate, BodyFormatter, MAX_BODY_LENGTH, TRUNCATION_MARKER,
};
pub use interceptor::LoggingInterceptor;
pub use matcher::{is_exempt, ExemptionList};
pub use sink::{LogSink, TracingSink, REQUEST_LOG_TARGET};
