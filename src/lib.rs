//! rWaterlogger library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher. No subcommand means `status`.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let default_cmd = Commands::Status { json: false };
    let command = cli.command.as_ref().unwrap_or(&default_cmd);

    match command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Checkin { .. } => cli::commands::checkin::handle(command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(command, cfg),
    }
}

/// Diagnostics go to stderr and are off unless RUST_LOG or --verbose asks.
fn init_logging(verbose: bool) {
    let default = if verbose { "rwaterlogger=debug" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 2️⃣ load config once; a broken file can still be inspected and edited
    let mut cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) if matches!(cli.command, Some(Commands::Config { .. })) => {
            ui::messages::warning(format!("{}; using defaults", e));
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // 3️⃣ apply the --db override
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    tracing::debug!(database = %cfg.database, "Configuration loaded");

    dispatch(&cli, &cfg)
}
