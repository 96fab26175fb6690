//! Unified application error type.
//! Config, loader, analytics and cli all return AppError so a failure in any
//! step aborts the whole call with a single, printable message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO (missing config document or CSV)
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Invalid dataset name '{name}': must be one of {accepted}")]
    InvalidDatasetName { name: String, accepted: String },

    #[error("Malformed time field '{value}': {reason}")]
    MalformedTimeField { value: String, reason: String },

    #[error("Missing column '{column}' in {file}")]
    MissingColumn { column: String, file: String },

    #[error("Invalid value '{value}' in column '{column}'")]
    InvalidField { column: String, value: String },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
