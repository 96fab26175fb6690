use crate::config::Config;
use crate::core::calculator::buckets::TimeAggregator;
use crate::core::calculator::{nights, overlaps, timeline};
use crate::core::loader::Loader;
use crate::errors::AppResult;
use crate::models::dataset::Dataset;
use crate::models::record::{AggregatedRecord, CleanRecord};
use crate::models::sleep::{MinuteEntry, NightSummary, SleepOverlap};

/// Pipeline entry points shared by the CLI and the export.
pub struct Core<'a> {
    loader: Loader<'a>,
    aggregator: TimeAggregator,
}

impl<'a> Core<'a> {
    pub fn new(cfg: &'a Config, aggregator: TimeAggregator) -> Self {
        Self {
            loader: Loader::new(cfg),
            aggregator,
        }
    }

    pub fn aggregator(&self) -> &TimeAggregator {
        &self.aggregator
    }

    pub fn records(&self, name: &str) -> AppResult<Vec<AggregatedRecord>> {
        self.loader.load(name, &self.aggregator)
    }

    pub fn sleep_records(&self) -> AppResult<Vec<CleanRecord>> {
        self.loader.load_clean(Dataset::Sleep.as_str())
    }

    pub fn sleep_by_minute(&self) -> AppResult<Vec<MinuteEntry>> {
        timeline::build_sleep_by_minute(&self.sleep_records()?)
    }

    pub fn sleep_by_night(&self) -> AppResult<Vec<NightSummary>> {
        let minutes = self.sleep_by_minute()?;
        Ok(nights::build_sleep_by_night(&minutes, &self.aggregator))
    }

    pub fn overlaps(&self) -> AppResult<Option<Vec<SleepOverlap>>> {
        overlaps::check_overlaps(&self.sleep_records()?)
    }
}
