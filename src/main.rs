mod config;
mod display;
mod error;
mod weather;

use std::io;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Fetches the hourly forecast for the configured location and prints the entry
/// closest to now. Logs go to stderr, the report to stdout.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env().inspect_err(|e| error!("Invalid configuration: {}", e))?;

    let weather =
        weather::fetch_current_weather(config.latitude, config.longitude, &config.api_key)
            .await
            .inspect_err(|e| error!(stage = e.stage(), "Failed to fetch weather: {}", e))?;
    info!("Weather for {} fetched", weather.timestamp);

    display::present(&weather, &mut io::stdout().lock())?;

    Ok(())
}
