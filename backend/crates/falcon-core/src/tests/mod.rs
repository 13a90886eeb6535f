mod models;
mod panels;

use chrono::{DateTime, TimeZone, Utc};

/// Fixed instant so derived strings are deterministic
pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}
