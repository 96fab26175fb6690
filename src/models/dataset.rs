use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// The logical datasets the loader knows how to clean.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Dataset {
    Pumped,
    Nursed,
    Nappies,
    Formula,
    Sleep,
    Pump,
}

impl Dataset {
    pub const ALL: [Dataset; 6] = [
        Dataset::Pumped,
        Dataset::Nursed,
        Dataset::Nappies,
        Dataset::Formula,
        Dataset::Sleep,
        Dataset::Pump,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Pumped => "pumped",
            Dataset::Nursed => "nursed",
            Dataset::Nappies => "nappies",
            Dataset::Formula => "formula",
            Dataset::Sleep => "sleep",
            Dataset::Pump => "pump",
        }
    }

    /// Exact, case-sensitive lookup: names in the config document are keys.
    pub fn parse(name: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == name)
            .ok_or_else(|| AppError::InvalidDatasetName {
                name: name.to_string(),
                accepted: Self::accepted_names(),
            })
    }

    pub fn accepted_names() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|d| d.as_str()).collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
