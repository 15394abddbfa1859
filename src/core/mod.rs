pub mod aggregate;
pub mod fetch;
pub mod filter;
pub mod normalize;
pub mod report;

pub use aggregate::build_views;
pub use fetch::fetch_all;
pub use filter::{DateRange, filter};
pub use normalize::{normalize, round_hours};
pub use report::ReportLogic;
