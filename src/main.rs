//! Duty pay server.
//!
//! Serves the duty pay engine over HTTP.
//!
//! Environment:
//! - `DUTY_PAY_CONFIG`: configuration directory (default `./config/nrw`)
//! - `DUTY_PAY_ADDR`: listen address (default `127.0.0.1:3000`)
//! - `RUST_LOG`: log filter (default `duty_pay_engine=info`)

use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, warn};

use duty_pay_engine::api::{AppState, create_router};
use duty_pay_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/nrw";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("duty_pay_engine=info".parse()?),
        )
        .init();

    let config_dir = std::env::var("DUTY_PAY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr: SocketAddr = std::env::var("DUTY_PAY_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .context("DUTY_PAY_ADDR is not a socket address")?;

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {}", config_dir))?;

    let holidays = config.holidays();
    for skipped in &holidays.skipped {
        warn!(row = skipped.row, reason = %skipped.reason, "Skipped holiday row");
    }
    info!(
        config_dir = %config_dir,
        region = %config.rules().region,
        target_month = %config.rules().target_month,
        holidays = holidays.set.len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(addr = %addr, "Duty pay server listening");

    axum::serve(listener, router).await?;
    Ok(())
}
