//! Domain types for request logging
//!
//! - Capabilities the host framework must expose (`InboundRequest`, `OutboundResponse`)
//! - Owned captures of both (`CapturedRequest`, `CapturedResponse`)
//! - Value objects (`Severity`, `Direction`) and the transient `LogRecord`
//! - Configuration (`RequestLoggerConfig`)

pub mod config;
mod http;
mod record;

pub use config::*;
pub use http::*;
pub use record::*;
