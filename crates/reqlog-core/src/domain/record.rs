//! Severity, direction and the per-call log record

use std::fmt;

use super::{InboundRequest, OutboundResponse};

/// Log severity of a line handed to the sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    /// Error for 4xx/5xx, info for everything else (including codes >= 600)
    pub fn for_status(status_code: u16) -> Self {
        if is_error_status(status_code) {
            Severity::Error
        } else {
            Severity::Info
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status codes in `[400, 600)` are errors
pub fn is_error_status(status_code: u16) -> bool {
    (400..600).contains(&status_code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Request,
    Response,
}

/// One observation of a request or response.
///
/// Built per hook call from borrowed data and dropped when the call returns.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub direction: Direction,
    pub method: &'a str,
    pub path: &'a str,
    pub status_code: Option<u16>,
    pub body: &'a [u8],
    pub severity: Severity,
}

impl<'a> LogRecord<'a> {
    /// Record for a request entering the application (always info)
    pub fn request<Q>(request: &'a Q) -> Self
    where
        Q: InboundRequest + ?Sized,
    {
        Self {
            direction: Direction::Request,
            method: request.method(),
            path: request.full_path(),
            status_code: None,
            body: request.body(),
            severity: Severity::Info,
        }
    }

    /// Record for a response leaving the application, severity from the status class
    pub fn response<Q, S>(request: &'a Q, response: &'a S) -> Self
    where
        Q: InboundRequest + ?Sized,
        S: OutboundResponse + ?Sized,
    {
        let status_code = response.status_code();
        Self {
            direction: Direction::Response,
            method: request.method(),
            path: request.full_path(),
            status_code: Some(status_code),
            body: response.body(),
            severity: Severity::for_status(status_code),
        }
    }

    /// Single summary line for this record.
    ///
    /// Requests render as `"{method} {body}"`, responses as
    /// `"{method} {path} - {status}"`.
    pub fn summary(&self) -> String {
        match (self.direction, self.status_code) {
            (Direction::Response, Some(status)) => {
                format!("{} {} - {}", self.method, self.path, status)
            }
            _ => format!("{} {}", self.method, String::from_utf8_lossy(self.body)),
        }
    }
}
