//! rAttendance library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! attendance pipeline modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Central command dispatcher
///
/// `init` and `config` work on the file itself, so they run even when
/// `loaded` is an error. Every other command needs a valid configuration.
pub fn dispatch(cli: &Cli, loaded: AppResult<Config>, config_path: &Path) -> AppResult<()> {
    let effective = || -> AppResult<Config> {
        let mut cfg = loaded?;
        if let Some(hours) = cli.target {
            cfg.target_weekly_hours = hours;
        }
        debug!(path = %config_path.display(), target = cfg.target_weekly_hours, "configuration loaded");
        Ok(cfg)
    };

    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, config_path),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, &effective()?),
        Commands::Daily { .. } => cli::commands::daily::handle(&cli.command, &effective()?),
        Commands::Events { .. } => cli::commands::events::handle(&cli.command, &effective()?),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, &effective()?),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config.as_deref());
    let loaded = Config::load_from(&config_path);

    let level = match (&cli.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(cfg)) => cfg.log_level.clone(),
        (None, Err(_)) => "warn".to_string(),
    };
    logging::setup_logging(&level);

    dispatch(&cli, loaded, &config_path)
}

/// Configuration file location: `--config` when given, else the default.
pub fn resolve_config_path(custom: Option<&str>) -> PathBuf {
    custom
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file)
}
