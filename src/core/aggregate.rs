use crate::models::{Bucket, DetailRow, Granularity, PivotRow, PivotTable, ReportViews, Row};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Derive the Detail, Weekly and Monthly views from one row set.
pub fn build_views(rows: &[Row]) -> ReportViews {
    ReportViews {
        detail: detail(rows),
        weekly: pivot(rows, Granularity::Weekly),
        monthly: pivot(rows, Granularity::Monthly),
    }
}

/// Project each row to the detail columns, keeping row order.
pub fn detail(rows: &[Row]) -> Vec<DetailRow> {
    rows.iter()
        .map(|r| DetailRow {
            user: r.user.clone(),
            date: r.date,
            hours: r.hours,
            labels: r.labels.clone(),
            issue: r.issue.clone(),
        })
        .collect()
}

/// Pivot `rows` into a user × bucket grid of summed hours.
///
/// Users are listed in ascending order, bucket columns in ascending
/// chronological order behind the `total` column. Every user gets a cell for
/// every bucket present in the table (0 when they logged nothing there).
///
/// Sums are accumulated in hundredths of an hour: row hours carry exactly two
/// decimals, so cells and totals are exact and a user's total always equals
/// the sum of their detail hours regardless of summation order.
pub fn pivot(rows: &[Row], granularity: Granularity) -> PivotTable {
    let mut buckets: BTreeSet<Bucket> = BTreeSet::new();
    let mut per_user: BTreeMap<&str, HashMap<Bucket, i64>> = BTreeMap::new();

    for row in rows {
        let bucket = bucket_of(row, granularity);
        buckets.insert(bucket);
        *per_user
            .entry(row.user.as_str())
            .or_default()
            .entry(bucket)
            .or_insert(0) += to_cents(row.hours);
    }

    let buckets: Vec<Bucket> = buckets.into_iter().collect();

    let pivot_rows = per_user
        .into_iter()
        .map(|(user, sums)| {
            let cells: Vec<i64> = buckets
                .iter()
                .map(|b| sums.get(b).copied().unwrap_or(0))
                .collect();
            let total: i64 = cells.iter().sum();

            let mut values = Vec::with_capacity(cells.len() + 1);
            values.push(from_cents(total));
            values.extend(cells.into_iter().map(from_cents));

            PivotRow {
                user: user.to_string(),
                cells: values,
            }
        })
        .collect();

    PivotTable::new(granularity, buckets, pivot_rows)
}

fn bucket_of(row: &Row, granularity: Granularity) -> Bucket {
    match granularity {
        Granularity::Weekly => Bucket::week(row.year, row.iso_week),
        Granularity::Monthly => Bucket::month(row.year, row.month),
    }
}

fn to_cents(hours: f64) -> i64 {
    (hours * 100.0).round() as i64
}

fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}
