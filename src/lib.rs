//! WorkPulse library root.
//! Exposes the CLI parser, the high-level run() function, and the session
//! core (validator, calculator, store, presenter) used by every command.

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
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    let color = cfg.color_output && !cli.no_color;
    ui::messages::set_color(color);

    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Session => cli::commands::session::handle(cfg, color),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, color),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg, color),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, honouring --config
    let config_path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load_from(&config_path)?;

    // 3️⃣ diagnostics
    logging::init_tracing(
        cli.log_level.as_deref(),
        &cfg.log_level,
        cfg.color_output && !cli.no_color,
    );
    tracing::debug!(config = %config_path.display(), "configuration loaded");

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
