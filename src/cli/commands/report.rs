use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{DateRange, ReportLogic};
use crate::errors::AppResult;
use crate::export::XlsxSink;
use crate::source::GitlabClient;
use crate::ui::messages::{info, warning};
use std::path::PathBuf;
use std::time::Duration;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // Reject an inverted window before any request goes out.
    let range = DateRange::new(cli.from, cli.to)?;

    let url = cli.url.as_deref().unwrap_or(cfg.api_url.as_str());
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&cfg.output_file));

    let client = GitlabClient::new(
        url,
        &cli.token,
        Duration::from_secs(cfg.request_timeout_secs),
    )?;

    info(format!("Fetching timelogs for group '{}' ({range})", cli.team));

    let sink = XlsxSink::new(output);
    let views = ReportLogic::run(&client, &sink, &cli.team, &range)?;

    if views.is_empty() {
        warning("No timelogs found for the selected range; the report sheets are empty.");
    }

    Ok(())
}
