use crate::utils::date::parse_date;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
Creates a time tracking report as Excel file with 3 sheets:
  Detail:  logged time on issues, one line per timelog,
  Weekly:  logged time per user and ISO week,
  Monthly: logged time per user and month.";

/// Command-line interface definition for timereport
#[derive(Parser, Debug)]
#[command(
    name = "timereport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Export GitLab group timelogs as an Excel report",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    /// Namespace portion of the URL of the GitLab group,
    /// e.g. `ip34-22vt` (all teams) or `ip34-22vt/ip34-22vt_letsparty` (one team)
    pub team: String,

    /// Your personal access token
    pub token: String,

    /// Optional start date (YYYY-MM-DD, inclusive)
    #[arg(long = "from", value_name = "DATE", value_parser = parse_date_arg)]
    pub from: Option<NaiveDate>,

    /// Optional end date (YYYY-MM-DD, inclusive)
    #[arg(long = "to", value_name = "DATE", value_parser = parse_date_arg)]
    pub to: Option<NaiveDate>,

    /// Output file (default: TimeReport.xlsx in the working directory)
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Override the GraphQL endpoint
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Use an alternate configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print debug diagnostics to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}
