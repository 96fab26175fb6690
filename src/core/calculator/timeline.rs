use crate::core::calculator::asof::asof_value;
use crate::errors::{AppError, AppResult};
use crate::models::record::CleanRecord;
use crate::models::sleep::MinuteEntry;
use crate::models::sleep_status::SleepStatus;
use crate::utils::time::minutes_to_delta;
use chrono::{NaiveDateTime, TimeDelta};
use log::debug;

/// Sleep length in minutes, after renaming.
pub const DURATION_COLUMN: &str = "duration";

/// Start and computed end of one logged sleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepSession {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl SleepSession {
    pub fn from_record(record: &CleanRecord) -> AppResult<Self> {
        let raw = record
            .field(DURATION_COLUMN)
            .ok_or_else(|| AppError::InvalidField {
                column: DURATION_COLUMN.to_string(),
                value: String::new(),
            })?;

        let invalid = || AppError::InvalidField {
            column: DURATION_COLUMN.to_string(),
            value: raw.to_string(),
        };

        let minutes = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|m| m.is_finite() && *m >= 0.0)
            .ok_or_else(invalid)?;

        let start = record.timestamp()?;
        // end must stay a representable timestamp
        let end = minutes_to_delta(minutes)
            .and_then(|delta| start.checked_add_signed(delta))
            .ok_or_else(invalid)?;

        Ok(Self { start, end })
    }
}

/// Status changes: `asleep` at every start, `awake` at every end.
///
/// Sorted by time; an `awake` and an `asleep` at the same instant are kept in
/// that order so back-to-back sessions read as asleep.
pub fn build_schedule(sessions: &[SleepSession]) -> Vec<(NaiveDateTime, SleepStatus)> {
    let mut schedule: Vec<(NaiveDateTime, SleepStatus)> = sessions
        .iter()
        .map(|s| (s.end, SleepStatus::Awake))
        .chain(sessions.iter().map(|s| (s.start, SleepStatus::Asleep)))
        .collect();

    schedule.sort_by_key(|(ts, _)| *ts);
    schedule
}

/// One entry per minute from the first sleep to the last wake-up, each
/// carrying the latest known status.
pub fn build_sleep_by_minute(records: &[CleanRecord]) -> AppResult<Vec<MinuteEntry>> {
    let sessions = records
        .iter()
        .map(SleepSession::from_record)
        .collect::<AppResult<Vec<_>>>()?;

    let (Some(first), Some(last)) = (
        sessions.iter().map(|s| s.start).min(),
        sessions.iter().map(|s| s.end).max(),
    ) else {
        return Ok(Vec::new());
    };

    let schedule = build_schedule(&sessions);
    let step = TimeDelta::minutes(1);

    let mut minutes = Vec::new();
    let mut ts = first;
    while ts <= last {
        // first is the earliest event, so every minute has a status
        let status = asof_value(&schedule, &ts)
            .copied()
            .unwrap_or(SleepStatus::Awake);
        minutes.push(MinuteEntry::new(ts, status));
        ts += step;
    }

    debug!(
        "sleep timeline: {} sessions, {} minutes ({} -> {})",
        sessions.len(),
        minutes.len(),
        first,
        last
    );
    Ok(minutes)
}
