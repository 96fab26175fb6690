//! Developmental month/week labels relative to a reference date (the birthday).

use crate::models::record::{Bucketed, Dated};
use chrono::{Datelike, NaiveDate};

/// Labels rows with `month` and `week` counted from `reference`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAggregator {
    reference: NaiveDate,
    month_cap: i64,
}

impl Default for TimeAggregator {
    fn default() -> Self {
        Self::new(Self::default_reference())
    }
}

impl TimeAggregator {
    pub const MONTH_CAP: i64 = 5;

    pub fn default_reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 5, 15).unwrap_or_default()
    }

    pub fn new(reference: NaiveDate) -> Self {
        Self {
            reference,
            month_cap: Self::MONTH_CAP,
        }
    }

    pub fn with_month_cap(mut self, cap: i64) -> Self {
        self.month_cap = cap;
        self
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// `date.month - ref.month + (date.day > ref.day) - 1`, clipped above.
    ///
    /// Only the month numbers are compared, so the reference date itself is
    /// month -1 and the label does not roll over at year boundaries.
    pub fn month(&self, date: NaiveDate) -> i64 {
        let raw = date.month() as i64 - self.reference.month() as i64
            + i64::from(date.day() > self.reference.day())
            - 1;
        raw.min(self.month_cap)
    }

    /// Whole weeks since the reference, floored (the day before is week -1).
    pub fn week(&self, date: NaiveDate) -> i64 {
        (date - self.reference).num_days().div_euclid(7)
    }

    pub fn label<T: Dated>(&self, row: T) -> Bucketed<T> {
        let date = row.bucket_date();
        Bucketed {
            month: self.month(date),
            week: self.week(date),
            inner: row,
        }
    }

    pub fn aggregate<T: Dated>(&self, rows: Vec<T>) -> Vec<Bucketed<T>> {
        rows.into_iter().map(|r| self.label(r)).collect()
    }
}
