//! Request/Response Logging Interceptor
//!
//! Two independent hooks around the application:
//! - `on_request_enter`: summary line plus the (truncated) request body
//! - `on_response_exit`: status line plus the JSON response body, at error
//!   severity for 4xx/5xx
//!
//! Both hooks recompute the path exemption on their own. Sink failures are
//! reported once per call through `tracing` and never reach the caller.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{
    InboundRequest, LogRecord, OutboundResponse, RequestLoggerConfig, Severity,
};
use crate::error::{ConfigError, SinkError};
use crate::formatter::{is_json_content_type, truncate, BodyFormatter};
use crate::matcher::ExemptionList;
use crate::sink::LogSink;

/// Stateless request/response logger, shared across tasks as `Arc<LoggingInterceptor>`
pub struct LoggingInterceptor {
    exemptions: ExemptionList,
    formatter: BodyFormatter,
    max_body_length: usize,
    sink: Arc<dyn LogSink>,
}

impl std::fmt::Debug for LoggingInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingInterceptor")
            .field("exemptions", &self.exemptions)
            .field("formatter", &self.formatter)
            .field("max_body_length", &self.max_body_length)
            .finish_non_exhaustive()
    }
}

impl LoggingInterceptor {
    /// Validate `config` and freeze it together with the sink
    pub fn new(config: RequestLoggerConfig, sink: Arc<dyn LogSink>) -> Result<Self, ConfigError> {
        config.validate()?;

        let exemptions = ExemptionList::new(
            config.ignored_paths_exact,
            config.ignored_paths_startswith,
        );
        debug!(
            "[RequestLogger] {} exact / {} prefix exemptions, body limit {} bytes",
            exemptions.exact().len(),
            exemptions.prefixes().len(),
            config.max_body_length
        );

        Ok(Self {
            exemptions,
            formatter: BodyFormatter::new(config.colorize),
            max_body_length: config.max_body_length,
            sink,
        })
    }

    pub fn exemptions(&self) -> &ExemptionList {
        &self.exemptions
    }

    pub fn max_body_length(&self) -> usize {
        self.max_body_length
    }

    pub fn is_exempt(&self, full_path: &str) -> bool {
        self.exemptions.is_exempt(full_path)
    }

    /// Log a request entering the application
    pub fn on_request_enter<Q>(&self, request: &Q)
    where
        Q: InboundRequest + ?Sized,
    {
        if self.is_exempt(request.full_path()) {
            return;
        }

        let record = LogRecord::request(request);
        let result = self.emit_summary(&record).and_then(|()| {
            if record.body.is_empty() {
                Ok(())
            } else {
                self.log_body(record.body, Severity::Info)
            }
        });

        if let Err(e) = result {
            warn!(path = %record.path, "[RequestLogger] Dropped request log lines: {}", e);
        }
    }

    /// Log a response leaving the application and hand it back unchanged
    pub fn on_response_exit<Q, S>(&self, request: &Q, response: S) -> S
    where
        Q: InboundRequest + ?Sized,
        S: OutboundResponse,
    {
        if self.is_exempt(request.full_path()) {
            return response;
        }

        let record = LogRecord::response(request, &response);
        let result = self.emit_summary(&record).and_then(|()| {
            if is_json_content_type(response.content_type()) {
                self.log_body(record.body, record.severity)
            } else {
                Ok(())
            }
        });

        if let Err(e) = result {
            warn!(path = %record.path, "[RequestLogger] Dropped response log lines: {}", e);
        }

        response
    }

    fn emit_summary(&self, record: &LogRecord<'_>) -> Result<(), SinkError> {
        let line = self.formatter.render_line(&record.summary(), record.severity);
        self.sink.emit(record.severity, &line)
    }

    fn log_body(&self, body: &[u8], severity: Severity) -> Result<(), SinkError> {
        let body = truncate(body, self.max_body_length);
        self.formatter
            .log_body(&body, severity, |line| self.sink.emit(severity, &line))
    }
}
