// src/export/model.rs

use crate::models::record::AggregatedRecord;
use crate::models::sleep::{MinuteEntry, NightSummary, SleepOverlap};
use crate::utils::time::format_timestamp;
use serde::Serialize;

/// A derived view ready to be written out.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ViewData {
    Records(Vec<AggregatedRecord>),
    Minutes(Vec<MinuteEntry>),
    Nights(Vec<NightSummary>),
    Overlaps(Vec<SleepOverlap>),
}

/// Header + string rows, the shape the CSV writer and the table renderer want.
pub(crate) struct FlatTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ViewData {
    pub fn len(&self) -> usize {
        match self {
            ViewData::Records(v) => v.len(),
            ViewData::Minutes(v) => v.len(),
            ViewData::Nights(v) => v.len(),
            ViewData::Overlaps(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn to_table(&self) -> FlatTable {
        match self {
            ViewData::Records(v) => records_to_table(v),
            ViewData::Minutes(v) => minutes_to_table(v),
            ViewData::Nights(v) => nights_to_table(v),
            ViewData::Overlaps(v) => overlaps_to_table(v),
        }
    }
}

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Extra columns come from the first record; every row of a dataset shares them.
fn records_to_table(records: &[AggregatedRecord]) -> FlatTable {
    let mut hdr = headers(&["start_date", "start_hour", "start_minute"]);
    if let Some(first) = records.first() {
        hdr.extend(first.inner.fields.iter().map(|(name, _)| name.clone()));
    }
    hdr.extend(headers(&["month", "week"]));

    let rows = records
        .iter()
        .map(|r| {
            let mut row = vec![
                r.inner.date_str(),
                format!("{:02}", r.inner.start_hour),
                format!("{:02}", r.inner.start_minute),
            ];
            row.extend(r.inner.fields.iter().map(|(_, value)| value.clone()));
            row.push(r.month.to_string());
            row.push(r.week.to_string());
            row
        })
        .collect();

    FlatTable { headers: hdr, rows }
}

fn minutes_to_table(minutes: &[MinuteEntry]) -> FlatTable {
    let rows = minutes
        .iter()
        .map(|m| {
            vec![
                format_timestamp(&m.timestamp),
                m.status.to_string(),
                m.date.to_string(),
                m.time.format("%H:%M:%S").to_string(),
                format!("{:.1}", m.awake),
            ]
        })
        .collect();

    FlatTable {
        headers: headers(&["timestamp", "status", "date", "time", "awake"]),
        rows,
    }
}

fn nights_to_table(nights: &[NightSummary]) -> FlatTable {
    let rows = nights
        .iter()
        .map(|n| {
            vec![
                n.inner.night_date.to_string(),
                format!("{:.2}", n.inner.sleep_hours),
                n.month.to_string(),
                n.week.to_string(),
            ]
        })
        .collect();

    FlatTable {
        headers: headers(&["night_date", "sleep_hours", "month", "week"]),
        rows,
    }
}

fn overlaps_to_table(overlaps: &[SleepOverlap]) -> FlatTable {
    let rows = overlaps
        .iter()
        .map(|o| {
            vec![
                format_timestamp(&o.start),
                format_timestamp(&o.end),
                format_timestamp(&o.next_start),
                o.overlap_minutes().to_string(),
            ]
        })
        .collect();

    FlatTable {
        headers: headers(&["start", "end", "next_start", "overlap_minutes"]),
        rows,
    }
}
