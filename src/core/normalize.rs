use crate::models::{RawTimelogEntry, Row};
use chrono::{Datelike, Utc};

/// Seconds → hours, rounded to 2 decimals, halves away from zero.
///
/// `seconds / 36` is the exact hundredths-of-an-hour value, so the halfway
/// cases (e.g. 18 s = 0.005 h) round deterministically: 18 s → 0.01.
pub fn round_hours(seconds: i64) -> f64 {
    (seconds as f64 / 36.0).round() / 100.0
}

/// Flatten raw timelogs into rows, one per entry, input order preserved.
pub fn normalize(entries: &[RawTimelogEntry]) -> Vec<Row> {
    entries.iter().map(normalize_entry).collect()
}

pub fn normalize_entry(entry: &RawTimelogEntry) -> Row {
    // Calendar fields come from the UTC day, the time of day is dropped after.
    let date = entry.spent_at.with_timezone(&Utc).date_naive();

    Row {
        user: entry.user.clone(),
        date,
        hours: round_hours(entry.time_spent),
        labels: entry.labels.clone(),
        issue: entry.issue.clone(),
        year: date.year(),
        month: date.month(),
        iso_week: date.iso_week().week(),
    }
}
