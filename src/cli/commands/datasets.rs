use crate::config::Config;
use crate::errors::AppResult;
use crate::models::dataset::Dataset;
use crate::utils::colors::{GREY, paint};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let headers = ["dataset", "file", "renames"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let rows = Dataset::ALL
        .iter()
        .map(|d| match cfg.datasets.get(d.as_str()) {
            Some(entry) => {
                let renames: Vec<String> = entry
                    .rename_columns
                    .iter()
                    .map(|(from, to)| format!("{from} -> {to}"))
                    .collect();
                vec![
                    d.to_string(),
                    cfg.data_file(entry).display().to_string(),
                    renames.join(", "),
                ]
            }
            None => vec![d.to_string(), paint("(not configured)", GREY), String::new()],
        })
        .collect();

    super::print_rows("Datasets", headers, rows, None);
    Ok(())
}
