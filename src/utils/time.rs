//! Time utilities: minute/hour conversions and readable durations.

use chrono::{NaiveDateTime, TimeDelta};

/// Fractional minutes (as logged in the `duration` column) to a TimeDelta,
/// rounded to the second. `None` when out of TimeDelta range.
pub fn minutes_to_delta(minutes: f64) -> Option<TimeDelta> {
    let seconds = (minutes * 60.0).round();
    if !seconds.is_finite() || seconds.abs() >= i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_seconds(seconds as i64)
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// 7.5 → "07h 30m"
pub fn hours2readable(hours: f64) -> String {
    let total = (hours * 60.0).round() as i64;
    format!("{:02}h {:02}m", total / 60, total % 60)
}
