mod common;
use common::{date, row};
use timereport::core::{DateRange, filter};
use timereport::errors::AppError;

fn sample() -> Vec<timereport::models::Row> {
    vec![
        row("a", "2024-01-01", 1.0),
        row("b", "2024-01-05", 2.0),
        row("a", "2024-01-10", 3.0),
        row("c", "2024-01-15", 4.0),
    ]
}

#[test]
fn test_filter_bounds_are_inclusive() {
    let range = DateRange::new(Some(date("2024-01-05")), Some(date("2024-01-10"))).unwrap();

    let kept = filter(sample(), &range);

    let dates: Vec<_> = kept.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![date("2024-01-05"), date("2024-01-10")]);
}

#[test]
fn test_filter_without_bounds_is_identity() {
    let kept = filter(sample(), &DateRange::unbounded());

    assert_eq!(kept, sample());
}

#[test]
fn test_filter_from_only() {
    let range = DateRange::new(Some(date("2024-01-10")), None).unwrap();

    let kept = filter(sample(), &range);

    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].user, "a");
    assert_eq!(kept[1].user, "c");
}

#[test]
fn test_filter_to_only() {
    let range = DateRange::new(None, Some(date("2024-01-01"))).unwrap();

    let kept = filter(sample(), &range);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].date, date("2024-01-01"));
}

#[test]
fn test_filter_single_day_range() {
    let range = DateRange::new(Some(date("2024-01-15")), Some(date("2024-01-15"))).unwrap();

    let kept = filter(sample(), &range);

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].user, "c");
}

#[test]
fn test_filter_everything_out() {
    let range = DateRange::new(Some(date("2025-01-01")), None).unwrap();

    assert!(filter(sample(), &range).is_empty());
}

#[test]
fn test_inverted_range_is_rejected() {
    let err = DateRange::new(Some(date("2024-02-01")), Some(date("2024-01-01"))).unwrap_err();

    match err {
        AppError::InvalidRange { from, to } => {
            assert_eq!(from, date("2024-02-01"));
            assert_eq!(to, date("2024-01-01"));
        }
        other => panic!("expected InvalidRange, got {other:?}"),
    }
}

#[test]
fn test_range_display() {
    assert_eq!(DateRange::unbounded().to_string(), "all dates");
    let r = DateRange::new(Some(date("2024-01-01")), Some(date("2024-01-31"))).unwrap();
    assert_eq!(r.to_string(), "2024-01-01 to 2024-01-31");
}
