use clap::Parser;

mod bootstrap;
mod cli;
mod countdown;
mod sync;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("zex error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(&cli)?;
    let client = zex_api::ZenMoneyClient::new(&config.zenmoney.token, &config.zenmoney.base_url);

    if config.sync.daemon {
        sync::run_daemon(&config, &client).await
    } else {
        sync::run_once(&config, &client).await
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("ZENEXPORT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
