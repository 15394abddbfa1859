use crate::core::aggregate::build_views;
use crate::core::fetch::fetch_all;
use crate::core::filter::{DateRange, filter};
use crate::core::normalize::normalize;
use crate::errors::AppResult;
use crate::export::ReportSink;
use crate::models::ReportViews;
use crate::source::TimelogSource;
use tracing::debug;

/// High-level report pipeline: fetch → normalize → filter → aggregate → sink.
pub struct ReportLogic;

impl ReportLogic {
    /// Build the three report views for `namespace` without writing them.
    pub fn build<S: TimelogSource>(
        source: &S,
        namespace: &str,
        range: &DateRange,
    ) -> AppResult<ReportViews> {
        let raw = fetch_all(source, namespace)?;

        let rows = normalize(&raw);
        drop(raw);

        let fetched = rows.len();
        let rows = filter(rows, range);
        debug!(fetched, kept = rows.len(), %range, "rows filtered");

        Ok(build_views(&rows))
    }

    /// Build the views and hand them to `sink`. The sink is only reached when
    /// every earlier stage succeeded.
    pub fn run<S: TimelogSource, K: ReportSink>(
        source: &S,
        sink: &K,
        namespace: &str,
        range: &DateRange,
    ) -> AppResult<ReportViews> {
        let views = Self::build(source, namespace, range)?;
        sink.write(&views)?;
        Ok(views)
    }
}
