//! Display strings derived from timestamps.

use chrono::{DateTime, Utc};

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 1440;

/// Relative time for alert timestamps.
///
/// "Just now" under a minute, then minutes, then hours, and the calendar date
/// once a day has passed.
pub fn format_relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - at).num_minutes();

    if minutes < 1 {
        String::from("Just now")
    } else if minutes < MINUTES_PER_HOUR {
        format!("{minutes}m ago")
    } else if minutes < MINUTES_PER_DAY {
        format!("{}h ago", minutes / MINUTES_PER_HOUR)
    } else {
        at.format("%Y-%m-%d").to_string()
    }
}

/// Time on shift as "{h}h {m}m"
pub fn format_elapsed(since: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - since).num_minutes().max(0);
    format!(
        "{}h {}m",
        minutes / MINUTES_PER_HOUR,
        minutes % MINUTES_PER_HOUR
    )
}

/// Last check-in: "Just now", then minutes under an hour, whole hours after
pub fn format_check_in(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - at).num_minutes();

    if minutes < 1 {
        String::from("Just now")
    } else if minutes < MINUTES_PER_HOUR {
        format!("{minutes}m ago")
    } else {
        format!("{}h ago", minutes / MINUTES_PER_HOUR)
    }
}
