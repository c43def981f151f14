//! Markets Feed Binary
//!
//! Runs one update cycle over the configured symbol list and prints the
//! ordered record list as JSON on stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p markets-feed -- config.yaml
//! ```
//!
//! The config path defaults to `config.yaml` when no argument is given.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter, overriding `observability.logging.level`

use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use markets_feed::application::use_cases::RefreshMarkets;
use markets_feed::config::{self, Config};
use markets_feed::infrastructure::batch::{BatchConfig, BatchExecutor};
use markets_feed::infrastructure::telemetry;
use markets_feed::infrastructure::yahoo::{
    ChartClient, ChartClientConfig, YahooMarketDataAdapter,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1);
    let config =
        config::load_config(config_path.as_deref()).context("loading configuration")?;

    telemetry::init(&config.observability.logging.level);
    log_config(&config);

    let cancel = CancellationToken::new();
    spawn_signal_handler(cancel.clone());

    let client = ChartClient::new(&ChartClientConfig {
        endpoint: config.fetch.endpoint.clone(),
        timeout: config.fetch.request_timeout(),
    })
    .context("building provider client")?;

    let executor = BatchExecutor::new(BatchConfig {
        max_workers: config.fetch.max_workers,
    });

    let adapter = Arc::new(YahooMarketDataAdapter::new(client, executor));
    let refresh = RefreshMarkets::new(adapter, config.markets.sort_by);

    let outcome = refresh
        .execute(&config.markets.markets, config.markets.duration, cancel)
        .await
        .context("refreshing markets")?;

    let artifact = serde_json::to_string_pretty(&outcome.markets)
        .context("serializing record list")?;
    println!("{artifact}");

    Ok(())
}

/// Cancel the update cycle on Ctrl+C.
fn spawn_signal_handler(cancel: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C, aborting update cycle");
            cancel.cancel();
        }
    });
}

/// Log the parsed configuration.
fn log_config(config: &Config) {
    tracing::info!(
        markets = config.markets.markets.len(),
        duration = %config.markets.duration,
        sort = config.markets.sort_by.as_str(),
        max_workers = config.fetch.max_workers,
        endpoint = %config.fetch.endpoint,
        "Configuration loaded"
    );
}
