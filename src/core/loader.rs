use crate::config::{Config, DatasetConfig};
use crate::core::calculator::buckets::TimeAggregator;
use crate::errors::{AppError, AppResult};
use crate::models::record::{AggregatedRecord, CleanRecord};
use crate::utils::date::parse_day_first;
use log::{debug, info};
use regex::Regex;
use std::fs::File;
use std::io::{self, Read};
use std::sync::LazyLock;

/// Combined date/time column of the raw export.
pub const TIME_COLUMN: &str = "Time";

/// Columns never carried into a cleaned record.
pub const DROPPED_COLUMNS: [&str; 3] = ["Baby", TIME_COLUMN, "Note"];

static TIME_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",|:").expect("static regex is valid"));

/// Reads a dataset CSV and turns it into sorted, typed records.
pub struct Loader<'a> {
    cfg: &'a Config,
}

impl<'a> Loader<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }

    /// Load, split, rename, drop and sort the rows of `name`.
    pub fn load_clean(&self, name: &str) -> AppResult<Vec<CleanRecord>> {
        let (dataset, entry) = self.cfg.resolve(name)?;
        let path = self.cfg.data_file(entry);

        debug!("reading {} from {}", dataset, path.display());
        let file = File::open(&path)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;

        let records = clean_csv(file, entry, &path.display().to_string())?;
        info!("{}: {} records loaded", dataset, records.len());
        Ok(records)
    }

    /// `load_clean` followed by the month/week labels.
    pub fn load(&self, name: &str, aggregator: &TimeAggregator) -> AppResult<Vec<AggregatedRecord>> {
        Ok(aggregator.aggregate(self.load_clean(name)?))
    }
}

/// Clean an already opened CSV source. `source` only names it in errors.
pub fn clean_csv<R: Read>(
    reader: R,
    entry: &DatasetConfig,
    source: &str,
) -> AppResult<Vec<CleanRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();

    let time_idx = headers
        .iter()
        .position(|h| h == TIME_COLUMN)
        .ok_or_else(|| missing_column(TIME_COLUMN, source))?;

    // renames are applied before dropping, as the raw export is renamed first
    let renamed: Vec<String> = headers
        .iter()
        .map(|h| entry.rename(h).to_string())
        .collect();

    for col in DROPPED_COLUMNS {
        if !renamed.iter().any(|h| h == col) {
            return Err(missing_column(col, source));
        }
    }

    let kept: Vec<usize> = (0..renamed.len())
        .filter(|&i| !DROPPED_COLUMNS.contains(&renamed[i].as_str()))
        .collect();

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let (start_date, start_hour, start_minute) =
            split_timestamp(row.get(time_idx).unwrap_or_default())?;

        let fields = kept
            .iter()
            .map(|&i| (renamed[i].clone(), row.get(i).unwrap_or_default().to_string()))
            .collect();

        records.push(CleanRecord {
            start_date,
            start_hour,
            start_minute,
            fields,
        });
    }

    // stable: rows logged in the same minute keep their file order
    records.sort_by_key(CleanRecord::sort_key);
    Ok(records)
}

/// Split `"D/M/YYYY,HH:MM"` into (date, hour, minute).
pub fn split_timestamp(raw: &str) -> AppResult<(chrono::NaiveDate, u32, u32)> {
    let parts: Vec<&str> = TIME_SPLIT.split(raw).map(str::trim).collect();

    let [date, hour, minute] = parts.as_slice() else {
        return Err(malformed(
            raw,
            format!("expected 'date,HH:MM', got {} part(s)", parts.len()),
        ));
    };

    let date = parse_day_first(date).ok_or_else(|| malformed(raw, "unparseable date"))?;

    let hour = hour
        .parse::<u32>()
        .ok()
        .filter(|h| *h < 24)
        .ok_or_else(|| malformed(raw, "invalid hour"))?;

    let minute = minute
        .parse::<u32>()
        .ok()
        .filter(|m| *m < 60)
        .ok_or_else(|| malformed(raw, "invalid minute"))?;

    Ok((date, hour, minute))
}

fn malformed(raw: &str, reason: impl Into<String>) -> AppError {
    AppError::MalformedTimeField {
        value: raw.to_string(),
        reason: reason.into(),
    }
}

fn missing_column(column: &str, source: &str) -> AppError {
    AppError::MissingColumn {
        column: column.to_string(),
        file: source.to_string(),
    }
}
