//! Diagnostic pass flagging sleep sessions that run into the next one.

use crate::core::calculator::timeline::SleepSession;
use crate::errors::AppResult;
use crate::models::record::CleanRecord;
use crate::models::sleep::SleepOverlap;
use log::info;

pub const NO_OVERLAP_MESSAGE: &str = "No overlapping sleep sessions";

/// Records whose end is at or after the start of the following record, in
/// the current row order. `None` when nothing overlaps.
pub fn check_overlaps(records: &[CleanRecord]) -> AppResult<Option<Vec<SleepOverlap>>> {
    let sessions = records
        .iter()
        .map(SleepSession::from_record)
        .collect::<AppResult<Vec<_>>>()?;

    let overlaps: Vec<SleepOverlap> = sessions
        .windows(2)
        .zip(records)
        .filter(|(pair, _)| pair[0].end >= pair[1].start)
        .map(|(pair, record)| SleepOverlap {
            record: record.clone(),
            start: pair[0].start,
            end: pair[0].end,
            next_start: pair[1].start,
        })
        .collect();

    if overlaps.is_empty() {
        info!("{}", NO_OVERLAP_MESSAGE.to_lowercase());
        return Ok(None);
    }

    info!("{} overlapping sleep session(s)", overlaps.len());
    Ok(Some(overlaps))
}
