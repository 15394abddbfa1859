use chrono::NaiveDate;
use std::fmt;

/// Time granularity of a pivot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Granularity {
    Weekly,
    Monthly,
}

impl Granularity {
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Granularity::Weekly => "Weekly",
            Granularity::Monthly => "Monthly",
        }
    }
}

/// A pivot column key: `(year, iso_week)` for weekly tables, `(year, month)`
/// for monthly ones. Field order gives the chronological ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bucket {
    pub year: i32,
    pub period: u32,
    pub granularity: Granularity,
}

impl Bucket {
    pub fn week(year: i32, iso_week: u32) -> Self {
        Self {
            year,
            period: iso_week,
            granularity: Granularity::Weekly,
        }
    }

    pub fn month(year: i32, month: u32) -> Self {
        Self {
            year,
            period: month,
            granularity: Granularity::Monthly,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.granularity {
            Granularity::Weekly => write!(f, "{}-W{:02}", self.year, self.period),
            Granularity::Monthly => write!(f, "{}-{:02}", self.year, self.period),
        }
    }
}

/// A pivot column. `Total` always comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Total,
    Bucket(Bucket),
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Total => f.write_str("total"),
            Column::Bucket(b) => b.fmt(f),
        }
    }
}

/// One user line of a pivot table; `cells` is aligned with the table columns.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotRow {
    pub user: String,
    pub cells: Vec<f64>,
}

/// User × time-bucket grid of summed hours, with the `total` column first.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    granularity: Granularity,
    columns: Vec<Column>,
    rows: Vec<PivotRow>,
}

impl PivotTable {
    /// Builds the column list by construction: `total`, then `buckets` in the
    /// given (already ascending) order. Each row must carry its total first.
    pub(crate) fn new(
        granularity: Granularity,
        buckets: Vec<Bucket>,
        rows: Vec<PivotRow>,
    ) -> Self {
        let mut columns = Vec::with_capacity(buckets.len() + 1);
        columns.push(Column::Total);
        columns.extend(buckets.into_iter().map(Column::Bucket));

        debug_assert!(rows.iter().all(|r| r.cells.len() == columns.len()));

        Self {
            granularity,
            columns,
            rows,
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[PivotRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.user.as_str())
    }

    pub fn buckets(&self) -> impl Iterator<Item = Bucket> + '_ {
        self.columns.iter().filter_map(|c| match c {
            Column::Bucket(b) => Some(*b),
            Column::Total => None,
        })
    }

    /// The materialized `total` cell of a user.
    pub fn total(&self, user: &str) -> Option<f64> {
        self.row(user).map(|r| r.cells[0])
    }

    /// Cell value for `(user, bucket)`; 0 for combinations without entries,
    /// `None` if the user or the bucket column is absent.
    pub fn cell(&self, user: &str, bucket: Bucket) -> Option<f64> {
        let idx = self.columns.iter().position(|c| *c == Column::Bucket(bucket))?;
        self.row(user).map(|r| r.cells[idx])
    }

    /// Header line as written to the sheet: `user`, `total`, bucket labels.
    pub fn headers(&self) -> Vec<String> {
        std::iter::once("user".to_string())
            .chain(self.columns.iter().map(|c| c.to_string()))
            .collect()
    }

    fn row(&self, user: &str) -> Option<&PivotRow> {
        self.rows.iter().find(|r| r.user == user)
    }
}

/// Detail projection of a row.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub user: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub labels: Vec<String>,
    pub issue: String,
}

impl DetailRow {
    /// Labels as written to the sheet.
    pub fn labels_str(&self) -> String {
        self.labels.join(", ")
    }
}

/// Detail headers, in sheet order.
pub const DETAIL_HEADERS: [&str; 5] = ["user", "spentAt", "timeSpent", "labels", "issue"];

/// The three report views derived from one row set.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportViews {
    pub detail: Vec<DetailRow>,
    pub weekly: PivotTable,
    pub monthly: PivotTable,
}

impl ReportViews {
    pub fn is_empty(&self) -> bool {
        self.detail.is_empty()
    }
}
