//! Body truncation and line rendering
//!
//! Bodies are cut at [`MAX_BODY_LENGTH`] bytes, decoded lossily and emitted one
//! line at a time so multi-line JSON stays readable in a line-oriented sink.

use colored::Colorize;
use std::borrow::Cow;

use crate::domain::Severity;

/// Log no more than this many bytes of a body
pub const MAX_BODY_LENGTH: usize = 50_000;

/// Appended to a body that was cut at the length limit
pub const TRUNCATION_MARKER: &[u8] = b"\n...\n";

/// Cut `body` to `limit` bytes and append [`TRUNCATION_MARKER`].
///
/// Bodies within the limit are returned borrowed and unchanged.
pub fn truncate(body: &[u8], limit: usize) -> Cow<'_, [u8]> {
    if body.len() <= limit {
        return Cow::Borrowed(body);
    }

    let mut cut = Vec::with_capacity(limit + TRUNCATION_MARKER.len());
    cut.extend_from_slice(&body[..limit]);
    cut.extend_from_slice(TRUNCATION_MARKER);
    Cow::Owned(cut)
}

/// JSON content-type gate for response bodies.
///
/// Matches when the media type (parameters stripped) starts with
/// `application/json`, case-insensitively. Missing header never matches.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(content_type) = content_type else {
        return false;
    };

    let media_type = content_type.split(';').next().unwrap_or("").trim();
    media_type
        .get(..16)
        .is_some_and(|head| head.eq_ignore_ascii_case("application/json"))
}

/// Renders body lines for a human-facing log stream
#[derive(Debug, Clone, Copy)]
pub struct BodyFormatter {
    colorize: bool,
}

impl Default for BodyFormatter {
    fn default() -> Self {
        Self { colorize: true }
    }
}

impl BodyFormatter {
    pub fn new(colorize: bool) -> Self {
        Self { colorize }
    }

    /// Plain formatter, for sinks that carry severity as a field
    pub fn plain() -> Self {
        Self { colorize: false }
    }

    pub fn colorize(&self) -> bool {
        self.colorize
    }

    /// Cyan for info, magenta for error
    pub fn render_line(&self, text: &str, severity: Severity) -> String {
        if !self.colorize {
            return text.to_string();
        }

        match severity {
            Severity::Info => text.cyan().to_string(),
            Severity::Error => text.magenta().to_string(),
        }
    }

    /// Split an already-truncated body on `\n` and pass each rendered line to `emit`.
    ///
    /// Stops at the first failed `emit` and returns its error.
    pub fn log_body<F, E>(&self, body: &[u8], severity: Severity, mut emit: F) -> Result<(), E>
    where
        F: FnMut(String) -> Result<(), E>,
    {
        let text = String::from_utf8_lossy(body);
        for line in text.split('\n') {
            emit(self.render_line(line, severity))?;
        }
        Ok(())
    }
}
