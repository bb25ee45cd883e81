//! Gateway Server
//!
//! Demo HTTP server wrapped in the request logging middleware.
//! The interceptor is injected through the constructor.

mod handlers;
pub mod logging_middleware;

pub use handlers::{HealthResponse, User};
pub use logging_middleware::request_logging_middleware;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use reqlog_core::LoggingInterceptor;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub const ENV_HOST: &str = "REQLOG_HOST";
pub const ENV_PORT: &str = "REQLOG_PORT";
pub const DEFAULT_PORT: u16 = 8080;

/// Gateway server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl GatewayConfig {
    /// Read `REQLOG_HOST` / `REQLOG_PORT`, keeping defaults for unset keys
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: {:?}", ENV_PORT, port))?;
        }
        Ok(config)
    }

    /// Get the socket address
    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid address {}:{}", self.host, self.port))
    }
}

/// Demo server hosting the logging middleware
pub struct GatewayServer {
    config: GatewayConfig,
    interceptor: Arc<LoggingInterceptor>,
}

impl GatewayServer {
    pub fn new(config: GatewayConfig, interceptor: Arc<LoggingInterceptor>) -> Self {
        Self {
            config,
            interceptor,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the Axum router
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/static/{*path}", get(handlers::static_asset))
            .route("/api/users", get(handlers::list_users))
            .route("/api/echo", post(handlers::echo))
            .route("/api/missing", get(handlers::missing))
            .route("/api/fail", get(handlers::fail))
            .route("/page", get(handlers::page))
            .layer(middleware::from_fn_with_state(
                self.interceptor.clone(),
                request_logging_middleware,
            ))
    }

    /// Run the gateway server until the listener fails
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.addr()?;
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("[Gateway] Listening on {}", addr);
        axum::serve(listener, router).await?;

        Ok(())
    }

    /// Start the server in the background
    pub fn spawn(self) -> tokio::task::JoinHandle<anyhow::Result<()>> {
        tokio::spawn(async move { self.run().await })
    }
}
