// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::FlatTable;
use crate::export::{ViewData, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(data: &ViewData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(data)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", data.len(), path);
    Ok(())
}

/// Export CSV with a header row.
pub(crate) fn export_csv(data: &ViewData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let FlatTable { headers, rows } = data.to_table();

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(&headers)?;
    for row in &rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", rows.len(), path);
    Ok(())
}
