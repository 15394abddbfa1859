// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel number format used for report dates.
pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";

/// Serial day number of `date` in Excel's 1900 date system.
pub(crate) fn date_to_excel_serial(date: NaiveDate) -> f64 {
    // 1899-12-30 absorbs Excel's phantom 1900-02-29.
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).expect("valid Excel epoch");
    (date - epoch).num_days() as f64
}
