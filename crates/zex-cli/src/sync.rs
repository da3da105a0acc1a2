//! Sync scheduler: one-shot and daemon execution of fetch + replicate.

use std::time::Duration;

use anyhow::Context;
use tokio::time::Instant;
use tracing::{error, info, warn};
use zex_api::ZenMoneyClient;
use zex_config::ZexConfig;
use zex_lake::ZexLake;

use crate::countdown;

/// Run exactly one (fetch, replicate) cycle.
///
/// # Errors
///
/// Returns the cycle's error; the caller turns it into a non-zero exit.
pub async fn run_once(config: &ZexConfig, client: &ZenMoneyClient) -> anyhow::Result<()> {
    run_cycle(config, client).await
}

/// Run forever, one cycle per interval.
///
/// Cycle failures are logged and never abort the loop. The next tick is
/// `cycle_start + interval` with no catch-up: a cycle that overruns the
/// interval puts the tick in the past and the next run starts immediately.
pub async fn run_daemon(config: &ZexConfig, client: &ZenMoneyClient) -> anyhow::Result<()> {
    let interval = Duration::from_secs(config.sync.interval_minutes * 60);
    info!(
        interval_minutes = config.sync.interval_minutes,
        "running as daemon"
    );

    loop {
        let cycle_start = Instant::now();
        if let Err(error) = run_cycle(config, client).await {
            error!("sync failed, waiting for next tick: {error:#}");
        }
        countdown::wait_until(cycle_start + interval).await;
    }
}

/// One replication run: fetch the snapshot, open the destination, replace
/// all tables, close the destination.
///
/// The store connection lives exactly as long as the run. A close failure
/// is logged but never masks the run outcome.
async fn run_cycle(config: &ZexConfig, client: &ZenMoneyClient) -> anyhow::Result<()> {
    info!("starting sync");

    let snapshot = client
        .full_sync()
        .await
        .context("full sync request failed")?;

    let lake = ZexLake::open(&config.lake.path).context("failed to open destination store")?;
    let outcome = lake.replicate(&snapshot);
    if let Err(close_error) = lake.close() {
        warn!("failed to close destination store: {close_error}");
    }
    outcome.context("replication failed")?;

    info!("sync completed");
    Ok(())
}
