use super::record::{Bucketed, CleanRecord, Dated};
use super::sleep_status::SleepStatus;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// One row of the per-minute sleep timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinuteEntry {
    pub timestamp: NaiveDateTime,
    pub status: SleepStatus,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub awake: f64,
}

impl MinuteEntry {
    pub fn new(timestamp: NaiveDateTime, status: SleepStatus) -> Self {
        Self {
            timestamp,
            status,
            date: timestamp.date(),
            time: timestamp.time(),
            awake: status.awake_flag(),
        }
    }

    pub fn asleep(&self) -> f64 {
        1.0 - self.awake
    }
}

/// Total sleep of one night (19:00 of `night_date` to 07:00 of the next day).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NightSleep {
    pub night_date: NaiveDate,
    pub sleep_hours: f64,
}

impl Dated for NightSleep {
    fn bucket_date(&self) -> NaiveDate {
        self.night_date
    }
}

/// Nightly sleep with the month/week of `night_date`.
pub type NightSummary = Bucketed<NightSleep>;

/// A sleep session ending at or after the start of the following one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepOverlap {
    pub record: CleanRecord,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub next_start: NaiveDateTime,
}

impl SleepOverlap {
    pub fn overlap_minutes(&self) -> i64 {
        (self.end - self.next_start).num_minutes()
    }
}
