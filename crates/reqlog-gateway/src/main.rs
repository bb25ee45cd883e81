use anyhow::Context;
use reqlog_core::{LoggingInterceptor, RequestLoggerConfig, TracingSink};
use reqlog_gateway::{init_tracing, GatewayConfig, GatewayServer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// JSON config file path; the environment is used when unset
const ENV_CONFIG_FILE: &str = "REQLOG_CONFIG";

fn load_logger_config() -> anyhow::Result<RequestLoggerConfig> {
    match std::env::var(ENV_CONFIG_FILE) {
        Ok(path) => {
            let path = PathBuf::from(path);
            info!("[Gateway] Loading request logger config from {}", path.display());
            RequestLoggerConfig::from_json_file(&path)
                .with_context(|| format!("Invalid config file {}", path.display()))
        }
        Err(_) => RequestLoggerConfig::from_env().context("Invalid request logger environment"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (for development)
    dotenvy::dotenv().ok();
    init_tracing();

    let mut logger_config = load_logger_config()?;
    if logger_config.colorize {
        // The console layer escapes ANSI inside messages and colors by level itself
        warn!("[Gateway] colorize has no effect with the tracing sink, disabling");
        logger_config.colorize = false;
    }
    let interceptor = Arc::new(LoggingInterceptor::new(logger_config, Arc::new(TracingSink))?);
    let gateway_config = GatewayConfig::from_env()?;

    GatewayServer::new(gateway_config, interceptor).run().await
}
