use clap::Parser;

/// Top-level CLI parser for the `zex` binary.
///
/// Every flag overrides the corresponding config value (flag > env > TOML
/// file > default); none are required if the config already carries them.
#[derive(Debug, Parser)]
#[command(
    name = "zex",
    version,
    about = "zenexport - replicate a ZenMoney snapshot into DuckDB"
)]
pub struct Cli {
    /// ZenMoney token. Get it from https://zerro.app/token
    #[arg(short, long)]
    pub token: Option<String>,

    /// Run as a daemon, one sync per interval
    #[arg(short, long)]
    pub daemon: bool,

    /// Minutes to wait between sync starts in daemon mode
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Path of the destination DuckDB database file
    #[arg(long, value_name = "PATH")]
    pub db_path: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
