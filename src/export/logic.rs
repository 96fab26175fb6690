// src/export/logic.rs

use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, ExportView, ViewData};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Compute `view` and write it to `file`.
    ///
    /// - `dataset`: required for `records`, ignored otherwise
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        core: &Core,
        view: ExportView,
        dataset: Option<&str>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        let data = Self::collect(core, view, dataset)?;

        if data.is_empty() {
            warning(format!("Nothing to export for view '{}'.", view.as_str()));
            return Ok(());
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&data, path),
            ExportFormat::Json => export_json(&data, path),
        }
    }

    pub fn collect(core: &Core, view: ExportView, dataset: Option<&str>) -> AppResult<ViewData> {
        Ok(match view {
            ExportView::Records => {
                let name = dataset.ok_or_else(|| {
                    AppError::Config("--dataset is required with --view records".into())
                })?;
                ViewData::Records(core.records(name)?)
            }
            ExportView::Minutes => ViewData::Minutes(core.sleep_by_minute()?),
            ExportView::Nights => ViewData::Nights(core.sleep_by_night()?),
            ExportView::Overlaps => ViewData::Overlaps(core.overlaps()?.unwrap_or_default()),
        })
    }
}
