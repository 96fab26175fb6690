#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rbabylog::config::Config;
use rbabylog::models::record::CleanRecord;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn rbl() -> Command {
    cargo_bin_cmd!("rbabylog")
}

pub const CONFIG_YML: &str = "\
sleep:
  file_name: sleep.csv
  rename_columns:
    Duration(minutes): duration
nappies:
  file_name: nappies.csv
  rename_columns:
    Status: kind
nursed:
  file_name: nursed.csv
";

pub const SLEEP_CSV: &str = "\
Baby,Time,Duration(minutes),Note
Ada,\"15/05/2021,19:00\",720,
Ada,\"16/05/2021,13:00\",90,nap
Ada,\"16/05/2021,19:30\",600,
";

pub const NAPPIES_CSV: &str = "\
Baby,Time,Status,Note
Ada,\"2/6/2021,08:05\",Wet,
Ada,\"1/6/2021,23:10\",Dirty,big one
Ada,\"1/6/2021,9:40\",Wet,
";

/// Create a fresh directory in the system temp dir holding `config.yml`
/// and a `data/` folder with the sleep and nappies logs.
pub fn setup_workspace(name: &str) -> PathBuf {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("{}_rbabylog", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(dir.join("data")).expect("create data dir");

    fs::write(dir.join("config.yml"), CONFIG_YML).expect("write config");
    write_data(&dir, "sleep.csv", SLEEP_CSV);
    write_data(&dir, "nappies.csv", NAPPIES_CSV);
    dir
}

pub fn write_data(dir: &Path, file: &str, content: &str) {
    fs::write(dir.join("data").join(file), content).expect("write csv");
}

pub fn config_path(dir: &Path) -> String {
    dir.join("config.yml").to_string_lossy().to_string()
}

pub fn load_config(dir: &Path) -> Config {
    Config::load(&dir.join("config.yml")).expect("load config")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A cleaned sleep record with the given start and duration in minutes.
pub fn sleep_record(day: NaiveDate, hour: u32, minute: u32, duration: &str) -> CleanRecord {
    CleanRecord {
        start_date: day,
        start_hour: hour,
        start_minute: minute,
        fields: vec![("duration".to_string(), duration.to_string())],
    }
}
