//! Reqlog Gateway
//!
//! Hosts the request/response logging interceptor in an axum application:
//! - `request_logging_middleware` for any router
//! - Trace IDs and request spans for correlation
//! - A small demo server and its binary

pub mod logging;
pub mod server;

pub use logging::{init_tracing, RequestSpan, TraceContext};
pub use server::{request_logging_middleware, GatewayConfig, GatewayServer};
