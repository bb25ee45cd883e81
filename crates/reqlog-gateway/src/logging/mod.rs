//! Centralized Logging Infrastructure
//!
//! Provides:
//! - Trace IDs for request correlation
//! - Colored console output via `tracing-subscriber`

mod trace_context;

pub use trace_context::{generate_trace_id, RequestSpan, TraceContext};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber: `RUST_LOG` if set, otherwise `info` with
/// our crates at `debug`. Console only, colored and compact.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut filter = EnvFilter::new("info");
        for directive in ["reqlog_core=debug", "reqlog_gateway=debug", "request-data=info"] {
            if let Ok(directive) = directive.parse() {
                filter = filter.add_directive(directive);
            }
        }
        filter
    });

    let console_layer = fmt::layer()
        .with_ansi(true)
        .compact()
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true);

    // try_init: a subscriber may already be installed (tests, embedding hosts)
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}
