//! Unified application error type.
//! Every stage of the report pipeline (source, core, export, cli) returns
//! AppError, so a failure anywhere aborts the run before output is written.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Remote source
    // ---------------------------
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Source data error: {0}")]
    SourceDataError(String),

    // ---------------------------
    // Parsing / validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: --from {from} is after --to {to}")]
    InvalidRange { from: NaiveDate, to: NaiveDate },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::SourceUnavailable(format!("request timed out: {e}"))
        } else if e.is_decode() {
            AppError::SourceDataError(format!("cannot decode response: {e}"))
        } else {
            AppError::SourceUnavailable(e.to_string())
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
