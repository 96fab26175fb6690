use crate::errors::{AppError, AppResult};
use crate::models::dataset::Dataset;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One entry of the dataset document: where the CSV lives and how its
/// columns are renamed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetConfig {
    pub file_name: String,
    #[serde(default)]
    pub rename_columns: BTreeMap<String, String>,
}

impl DatasetConfig {
    pub fn rename<'a>(&'a self, column: &'a str) -> &'a str {
        self.rename_columns
            .get(column)
            .map(String::as_str)
            .unwrap_or(column)
    }
}

/// Loaded once per run and passed by reference to every step.
#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub data_dir: PathBuf,
    pub datasets: BTreeMap<String, DatasetConfig>,
}

/// Result of `Config::check`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConfigReport {
    pub missing: Vec<Dataset>,
    pub unknown: Vec<String>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

impl Config {
    pub const DEFAULT_FILE: &'static str = "config.yml";
    pub const DATA_DIR: &'static str = "data";

    /// Read and parse the dataset document. A missing file is an I/O error.
    pub fn load(path: &Path) -> AppResult<Self> {
        debug!("loading dataset config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content, path.to_path_buf())
    }

    /// Parse a document as if it had been read from `path`.
    /// The data directory defaults to `data/` next to the document.
    pub fn from_yaml(content: &str, path: PathBuf) -> AppResult<Self> {
        let datasets: BTreeMap<String, DatasetConfig> = serde_yaml::from_str(content)?;
        let data_dir = path
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(Self::DATA_DIR);

        Ok(Self {
            path,
            data_dir,
            datasets,
        })
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Validate `name` against the recognized datasets, then look it up.
    pub fn resolve(&self, name: &str) -> AppResult<(Dataset, &DatasetConfig)> {
        let dataset = Dataset::parse(name)?;
        let entry = self.datasets.get(dataset.as_str()).ok_or_else(|| {
            AppError::Config(format!(
                "dataset '{}' is not configured in {}",
                dataset,
                self.path.display()
            ))
        })?;
        Ok((dataset, entry))
    }

    pub fn data_file(&self, entry: &DatasetConfig) -> PathBuf {
        self.data_dir.join(&entry.file_name)
    }

    pub fn check(&self) -> ConfigReport {
        let missing = Dataset::ALL
            .into_iter()
            .filter(|d| !self.datasets.contains_key(d.as_str()))
            .collect();
        let unknown = self
            .datasets
            .keys()
            .filter(|k| Dataset::parse(k).is_err())
            .cloned()
            .collect();

        ConfigReport { missing, unknown }
    }
}
