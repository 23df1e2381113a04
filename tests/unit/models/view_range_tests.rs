// Unit tests for ViewRange and NavDirection
// Parameterized over every granularity the timeline controls offer

use rust_timeline::models::view_range::{NavDirection, ViewRange};
use test_case::test_case;

#[test_case(ViewRange::Week, 7, "1week", "1 week"; "one week")]
#[test_case(ViewRange::TwoWeeks, 14, "2weeks", "2 weeks"; "two weeks")]
#[test_case(ViewRange::Month, 30, "1month", "1 month"; "one month")]
fn test_view_range_metadata(range: ViewRange, days: u32, key: &str, label: &str) {
    assert_eq!(range.day_count(), days);
    assert_eq!(range.key(), key);
    assert_eq!(range.to_string(), label);
}

#[test_case("1week", ViewRange::Week; "week key")]
#[test_case("2weeks", ViewRange::TwoWeeks; "two weeks key")]
#[test_case(" 1month ", ViewRange::Month; "month key with whitespace")]
fn test_view_range_from_str(input: &str, expected: ViewRange) {
    assert_eq!(input.parse::<ViewRange>().unwrap(), expected);
}

#[test]
fn test_view_range_from_str_unknown() {
    let err = "fortnight".parse::<ViewRange>().unwrap_err();
    assert!(err.contains("fortnight"));
}

#[test]
fn test_view_range_default_is_two_weeks() {
    assert_eq!(ViewRange::default(), ViewRange::TwoWeeks);
}

#[test]
fn test_view_range_serde_keys() {
    let json = serde_json::to_string(&ViewRange::Month).unwrap();
    assert_eq!(json, "\"1month\"");
    let parsed: ViewRange = serde_json::from_str("\"1week\"").unwrap();
    assert_eq!(parsed, ViewRange::Week);
}

#[test]
fn test_nav_direction_sign() {
    assert_eq!(NavDirection::Previous.sign(), -1);
    assert_eq!(NavDirection::Next.sign(), 1);
}
