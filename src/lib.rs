//! timereport library root.
//! Exposes the CLI parser, the high-level run() function and the report
//! pipeline: source → core (fetch, normalize, filter, aggregate) → export.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;
use tracing::debug;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let cfg = Config::load(cli.config.as_deref())?;

    // Nothing is logged before this point; the level comes from the config.
    logging::init(&cfg.log_level, cli.verbose);
    let cfg_path = cli.config.clone().unwrap_or_else(Config::config_file);
    debug!(
        path = %cfg_path.display(),
        api_url = %cfg.api_url,
        timeout_secs = cfg.request_timeout_secs,
        "configuration loaded"
    );

    cli::commands::report::handle(&cli, &cfg)
}
