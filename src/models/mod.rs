pub mod report;
pub mod row;
pub mod timelog;

pub use report::{
    Bucket, Column, DETAIL_HEADERS, DetailRow, Granularity, PivotRow, PivotTable, ReportViews,
};
pub use row::Row;
pub use timelog::{PageInfo, RawTimelogEntry, TimelogPage};
