use anyhow::Context;
use zex_config::ZexConfig;

use crate::cli::Cli;

/// Load the layered configuration and apply CLI flag overrides on top.
///
/// Precedence ends up as: flag > env var > local TOML > global TOML >
/// default, matching the original tool's flag-over-env behavior.
pub fn load_config(cli: &Cli) -> anyhow::Result<ZexConfig> {
    let mut config = ZexConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, cli);
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn apply_overrides(config: &mut ZexConfig, cli: &Cli) {
    if let Some(token) = &cli.token {
        config.zenmoney.token = token.clone();
    }
    if let Some(path) = &cli.db_path {
        config.lake.path = path.clone();
    }
    if let Some(interval) = cli.interval {
        config.sync.interval_minutes = interval;
    }
    if cli.daemon {
        config.sync.daemon = true;
    }
}
