use chrono::NaiveDate;

/// Flat, normalized timelog row. Built once by the normalizer, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub user: String,
    pub date: NaiveDate, // UTC calendar day of spentAt
    pub hours: f64,      // timeSpent / 3600, 2 decimals
    pub labels: Vec<String>,
    pub issue: String,
    pub year: i32,
    pub month: u32,    // 1..=12
    pub iso_week: u32, // 1..=53, ISO-8601 numbering
}
