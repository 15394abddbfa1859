pub mod date;

pub use date::parse_date;
