// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub(crate) use model::FlatTable;
pub use model::ViewData;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export.
pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!(
        "{label} export completed: {rows} row(s) -> {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Which derived table to write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportView {
    /// Cleaned records of one dataset with month/week (needs --dataset)
    Records,
    /// Per-minute asleep/awake timeline
    Minutes,
    /// Nightly sleep hours
    Nights,
    /// Overlapping sleep sessions
    Overlaps,
}

impl ExportView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportView::Records => "records",
            ExportView::Minutes => "minutes",
            ExportView::Nights => "nights",
            ExportView::Overlaps => "overlaps",
        }
    }
}
