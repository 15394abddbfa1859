//! Remote timelog sources.
//!
//! A source answers one page request per call; draining all pages is the
//! job of [`crate::core::fetch::fetch_all`].

pub mod gitlab;
mod wire;

pub use gitlab::GitlabClient;

use crate::errors::AppResult;
use crate::models::TimelogPage;

/// A cursor-paginated timelog endpoint.
pub trait TimelogSource {
    /// Fetch the page that follows `cursor` (`""` for the first page) for
    /// the given group/namespace.
    fn fetch_page(&self, namespace: &str, cursor: &str) -> AppResult<TimelogPage>;
}
