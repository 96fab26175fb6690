use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One cleaned CSV row.
///
/// The combined `Time` column is replaced by `start_date`, `start_hour` and
/// `start_minute`; `Baby`, `Time` and `Note` are gone and the remaining
/// columns keep their (renamed) header and CSV order.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub start_date: NaiveDate,
    pub start_hour: u32,
    pub start_minute: u32,
    pub fields: Vec<(String, String)>,
}

impl CleanRecord {
    pub fn field(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn sort_key(&self) -> (NaiveDate, u32, u32) {
        (self.start_date, self.start_hour, self.start_minute)
    }

    pub fn start_time(&self) -> AppResult<NaiveTime> {
        NaiveTime::from_hms_opt(self.start_hour, self.start_minute, 0).ok_or_else(|| {
            AppError::MalformedTimeField {
                value: format!("{}:{}", self.start_hour, self.start_minute),
                reason: "hour or minute out of range".to_string(),
            }
        })
    }

    /// Date + hour + minute combined.
    pub fn timestamp(&self) -> AppResult<NaiveDateTime> {
        Ok(self.start_date.and_time(self.start_time()?))
    }

    pub fn date_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }
}

impl Serialize for CleanRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.fields.len()))?;
        map.serialize_entry("start_date", &self.date_str())?;
        map.serialize_entry("start_hour", &self.start_hour)?;
        map.serialize_entry("start_minute", &self.start_minute)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Rows that can be labelled with month/week buckets.
pub trait Dated {
    fn bucket_date(&self) -> NaiveDate;
}

impl Dated for CleanRecord {
    fn bucket_date(&self) -> NaiveDate {
        self.start_date
    }
}

/// A row plus its developmental month/week labels.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Bucketed<T> {
    #[serde(flatten)]
    pub inner: T,
    pub month: i64,
    pub week: i64,
}

pub type AggregatedRecord = Bucketed<CleanRecord>;
