//! Outbound log sink
//!
//! The interceptor hands every rendered line to a [`LogSink`], one call per
//! line, in order. Sinks serialize their own writes.

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::Severity;
use crate::error::SinkError;

/// `tracing` target used by [`TracingSink`]
pub const REQUEST_LOG_TARGET: &str = "request-data";

/// Receives one log line at a time
pub trait LogSink: Send + Sync {
    fn emit(&self, severity: Severity, line: &str) -> Result<(), SinkError>;
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn emit(&self, severity: Severity, line: &str) -> Result<(), SinkError> {
        (**self).emit(severity, line)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn emit(&self, severity: Severity, line: &str) -> Result<(), SinkError> {
        (**self).emit(severity, line)
    }
}

/// Forwards lines to `tracing` under the `request-data` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, severity: Severity, line: &str) -> Result<(), SinkError> {
        match severity {
            Severity::Info => info!(target: REQUEST_LOG_TARGET, "{}", line),
            Severity::Error => error!(target: REQUEST_LOG_TARGET, "{}", line),
        }
        Ok(())
    }
}
