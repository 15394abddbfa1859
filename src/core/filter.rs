use crate::errors::{AppError, AppResult};
use crate::models::Row;
use chrono::NaiveDate;
use std::fmt;

/// Optional inclusive date window. A window with `from > to` cannot be built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> AppResult<Self> {
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                return Err(AppError::InvalidRange { from: f, to: t });
            }
        }
        Ok(Self { from, to })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|f| date >= f) && self.to.is_none_or(|t| date <= t)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.to) {
            (None, None) => f.write_str("all dates"),
            (Some(from), None) => write!(f, "from {from}"),
            (None, Some(to)) => write!(f, "until {to}"),
            (Some(from), Some(to)) => write!(f, "{from} to {to}"),
        }
    }
}

/// Keep the rows dated inside `range`. Row order is preserved; an unbounded
/// range returns the input as is.
pub fn filter(rows: Vec<Row>, range: &DateRange) -> Vec<Row> {
    if range.is_unbounded() {
        return rows;
    }
    rows.into_iter().filter(|r| range.contains(r.date)).collect()
}
