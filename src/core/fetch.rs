use crate::errors::{AppError, AppResult};
use crate::models::RawTimelogEntry;
use crate::source::TimelogSource;
use tracing::{debug, info};

/// Drain every page of `namespace` from `source`, starting with the empty
/// cursor and following `endCursor` until `hasNextPage` is false.
///
/// Pages are appended in the order they arrive. Empty pages that still
/// announce a successor are skipped over, not treated as the end. Any error
/// aborts the whole drain; entries gathered so far are dropped.
pub fn fetch_all<S: TimelogSource>(
    source: &S,
    namespace: &str,
) -> AppResult<Vec<RawTimelogEntry>> {
    let mut entries: Vec<RawTimelogEntry> = Vec::new();
    let mut cursor = String::new();
    let mut pages: usize = 0;

    loop {
        let page = source.fetch_page(namespace, &cursor)?;
        pages += 1;

        debug!(page = pages, count = page.entries.len(), "timelog page received");

        let has_next = page.page_info.has_next_page;
        let end_cursor = page.page_info.end_cursor;
        entries.extend(page.entries);

        if !has_next {
            break;
        }

        cursor = match end_cursor {
            Some(c) if !c.is_empty() => c,
            _ => {
                return Err(AppError::SourceDataError(format!(
                    "page {pages} announces a next page but carries no end cursor"
                )));
            }
        };
    }

    info!(pages, entries = entries.len(), namespace, "timelogs fetched");
    Ok(entries)
}
