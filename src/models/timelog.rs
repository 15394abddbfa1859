use chrono::{DateTime, FixedOffset};

/// One timelog record as delivered by the remote source.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTimelogEntry {
    pub user: String,                    // ⇔ user.username
    pub issue: String,                   // ⇔ issue.title ("" when not logged on an issue)
    pub labels: Vec<String>,             // ⇔ issue.labels.nodes[].title
    pub spent_at: DateTime<FixedOffset>, // ⇔ spentAt
    pub time_spent: i64,                 // ⇔ timeSpent (seconds)
}

/// Cursor metadata returned with every page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

/// A single page of timelogs plus its pagination metadata.
#[derive(Debug, Clone, Default)]
pub struct TimelogPage {
    pub entries: Vec<RawTimelogEntry>,
    pub page_info: PageInfo,
}
