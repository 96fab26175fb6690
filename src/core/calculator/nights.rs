use crate::core::calculator::asof::asof_value;
use crate::core::calculator::buckets::TimeAggregator;
use crate::models::sleep::{MinuteEntry, NightSleep, NightSummary};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use std::collections::BTreeMap;

/// A night starts at 19:00 ...
pub fn night_start() -> NaiveTime {
    NaiveTime::from_hms_opt(19, 0, 0).unwrap_or_default()
}

/// ... and ends at 07:00 the next morning.
pub fn night_end() -> NaiveTime {
    NaiveTime::from_hms_opt(7, 0, 0).unwrap_or_default()
}

/// A minute covers `[t, t + 1min)`: 19:00 is the first night minute and
/// 06:59 the last one, 720 minutes in total.
pub fn is_night(t: NaiveTime) -> bool {
    t >= night_start() || t < night_end()
}

/// Sum asleep minutes per night and label each night with month/week.
///
/// Every minute at exactly 19:00 anchors the night of its date; night
/// minutes are attributed to the latest anchor at or before them. Night
/// minutes seen before the first anchor have no night and are skipped.
pub fn build_sleep_by_night(
    minutes: &[MinuteEntry],
    aggregator: &TimeAggregator,
) -> Vec<NightSummary> {
    let start = night_start();

    let anchors: Vec<(NaiveDateTime, NaiveDate)> = minutes
        .iter()
        .filter(|m| m.time == start)
        .map(|m| (m.timestamp, m.date))
        .collect();

    let mut asleep_minutes: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut unanchored = 0usize;

    for m in minutes.iter().filter(|m| is_night(m.time)) {
        match asof_value(&anchors, &m.timestamp) {
            Some(night_date) => *asleep_minutes.entry(*night_date).or_default() += m.asleep(),
            None => unanchored += 1,
        }
    }

    if unanchored > 0 {
        debug!("{unanchored} night minutes before the first 19:00 anchor skipped");
    }

    let nights = asleep_minutes
        .into_iter()
        .map(|(night_date, total)| NightSleep {
            night_date,
            sleep_hours: total / 60.0,
        })
        .collect();

    aggregator.aggregate(nights)
}
