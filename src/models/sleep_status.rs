use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SleepStatus {
    Asleep,
    Awake,
}

impl SleepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SleepStatus::Asleep => "asleep",
            SleepStatus::Awake => "awake",
        }
    }

    pub fn is_awake(&self) -> bool {
        matches!(self, SleepStatus::Awake)
    }

    /// 1.0 when awake, 0.0 when asleep (the `awake` column of the timeline).
    pub fn awake_flag(&self) -> f64 {
        if self.is_awake() { 1.0 } else { 0.0 }
    }
}

impl fmt::Display for SleepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
