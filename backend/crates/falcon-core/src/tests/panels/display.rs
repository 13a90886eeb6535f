use crate::panels::display::{format_check_in, format_elapsed, format_relative_time};
use crate::tests::fixed_now;

use chrono::Duration;

#[test]
fn test_relative_time_just_now() {
    let now = fixed_now();
    assert_eq!(format_relative_time(now, now), "Just now");
    assert_eq!(format_relative_time(now - Duration::seconds(59), now), "Just now");
}

#[test]
fn test_relative_time_minutes_and_hours() {
    let now = fixed_now();
    assert_eq!(format_relative_time(now - Duration::minutes(5), now), "5m ago");
    assert_eq!(format_relative_time(now - Duration::minutes(59), now), "59m ago");
    assert_eq!(format_relative_time(now - Duration::minutes(60), now), "1h ago");
    assert_eq!(format_relative_time(now - Duration::minutes(1439), now), "23h ago");
}

#[test]
fn test_relative_time_older_than_a_day_shows_date() {
    let now = fixed_now();
    assert_eq!(
        format_relative_time(now - Duration::days(3), now),
        "2024-05-29"
    );
}

#[test]
fn test_relative_time_future_timestamp_is_just_now() {
    let now = fixed_now();
    assert_eq!(format_relative_time(now + Duration::minutes(10), now), "Just now");
}

#[test]
fn test_elapsed_formats_hours_and_minutes() {
    let now = fixed_now();
    assert_eq!(format_elapsed(now - Duration::minutes(210), now), "3h 30m");
    assert_eq!(format_elapsed(now, now), "0h 0m");
}

#[test]
fn test_check_in_switches_to_hours() {
    let now = fixed_now();
    assert_eq!(format_check_in(now - Duration::seconds(30), now), "Just now");
    assert_eq!(format_check_in(now - Duration::minutes(1), now), "1m ago");
    assert_eq!(format_check_in(now - Duration::minutes(12), now), "12m ago");
    assert_eq!(format_check_in(now - Duration::minutes(125), now), "2h ago");
}
