//! Customer Server - Main entry point

use anyhow::Result;
use customer_common::logging::{init_logging, LogConfig};
use tracing::info;

use customer_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Server defaults, overridden by LOG_* environment variables
    let log_config = LogConfig::builder()
        .log_file_prefix("customer-server")
        .filter_directives("customer_server=debug,tower_http=debug,sqlx=warn")
        .build()
        .merge_env()?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting Customer Server");

    let config = Config::load()?;
    info!(
        store = ?config.store,
        "Configuration loaded - server will bind to {}:{}",
        config.server.host,
        config.server.port
    );

    api::serve(config).await?;

    Ok(())
}
