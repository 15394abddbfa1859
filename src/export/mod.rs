// src/export/mod.rs

mod excel_date;
pub mod xlsx;

pub use xlsx::XlsxSink;

use crate::errors::AppResult;
use crate::models::ReportViews;
use crate::ui::messages::success;
use std::path::Path;

/// Default report file, written to the working directory.
pub const DEFAULT_REPORT_FILE: &str = "TimeReport.xlsx";

/// Destination for the three report views (Detail, Weekly, Monthly).
pub trait ReportSink {
    fn write(&self, views: &ReportViews) -> AppResult<()>;
}

/// Common completion message for a written report.
pub(crate) fn notify_export_success(path: &Path) {
    success(format!("{} created", path.display()));
}
