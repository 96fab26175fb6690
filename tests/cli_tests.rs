use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{config_path, rbl, setup_workspace};

#[test]
fn test_datasets_lists_configuration() {
    let dir = setup_workspace("cli_datasets");

    rbl()
        .args(["--config", &config_path(&dir), "datasets"])
        .assert()
        .success()
        .stdout(contains("sleep.csv"))
        .stdout(contains("Duration(minutes) -> duration"))
        .stdout(contains("(not configured)"));
}

#[test]
fn test_config_check_reports_missing() {
    let dir = setup_workspace("cli_config_check");

    rbl()
        .args(["--config", &config_path(&dir), "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Dataset 'pumped' is not configured"))
        .stdout(contains("Dataset 'sleep' is not configured").not());
}

#[test]
fn test_show_dataset_with_buckets() {
    let dir = setup_workspace("cli_show");

    rbl()
        .args(["--config", &config_path(&dir), "show", "nappies"])
        .assert()
        .success()
        .stdout(contains("start_date"))
        .stdout(contains("kind"))
        .stdout(contains("2021-06-01"))
        .stdout(contains("Baby").not())
        .stdout(contains("3 rows"));
}

#[test]
fn test_show_invalid_dataset_fails() {
    let dir = setup_workspace("cli_show_invalid");

    rbl()
        .args(["--config", &config_path(&dir), "show", "diapers"])
        .assert()
        .failure()
        .stderr(contains("Invalid dataset name 'diapers'"));
}

#[test]
fn test_missing_config_fails() {
    rbl()
        .args(["--config", "/definitely/not/here/config.yml", "datasets"])
        .assert()
        .failure()
        .stderr(contains("I/O error"));
}

#[test]
fn test_invalid_birthday_fails() {
    let dir = setup_workspace("cli_bad_birthday");

    rbl()
        .args(["--config", &config_path(&dir), "--birthday", "15/05/2021", "nights"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_minutes_with_limit() {
    let dir = setup_workspace("cli_minutes");

    rbl()
        .args(["--config", &config_path(&dir), "minutes", "--limit", "5"])
        .assert()
        .success()
        .stdout(contains("2021-05-15 19:00"))
        .stdout(contains("asleep"))
        .stdout(contains("5 of "));
}

#[test]
fn test_nights_reports_hours() {
    let dir = setup_workspace("cli_nights");

    rbl()
        .args(["--config", &config_path(&dir), "nights"])
        .assert()
        .success()
        .stdout(contains("2021-05-15"))
        .stdout(contains("12.00"))
        .stdout(contains("10h 00m"));
}

#[test]
fn test_overlaps_none() {
    let dir = setup_workspace("cli_overlaps_none");

    rbl()
        .args(["--config", &config_path(&dir), "overlaps"])
        .assert()
        .success()
        .stdout(contains("No overlapping sleep sessions"));
}

#[test]
fn test_overlaps_found() {
    let dir = setup_workspace("cli_overlaps_found");
    common::write_data(
        &dir,
        "sleep.csv",
        "Baby,Time,Duration(minutes),Note\n\
         Ada,\"1/6/2021,10:00\",60,\n\
         Ada,\"1/6/2021,10:30\",20,\n",
    );

    rbl()
        .args(["--config", &config_path(&dir), "overlaps"])
        .assert()
        .success()
        .stdout(contains("1 overlapping sleep session(s)"))
        .stdout(contains("2021-06-01 11:00"));
}

#[test]
fn test_export_nights_csv() {
    let dir = setup_workspace("cli_export_nights");
    let out = dir.join("nights.csv");

    rbl()
        .args([
            "--config",
            &config_path(&dir),
            "export",
            "--view",
            "nights",
            "--format",
            "csv",
            "--file",
            &out.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("night_date,sleep_hours,month,week"));
    assert!(content.contains("2021-05-15,12.00,-1,0"));
    assert!(content.contains("2021-05-16,10.00,0,0"));
}

#[test]
fn test_export_records_json() {
    let dir = setup_workspace("cli_export_records");
    let out = dir.join("nappies.json");

    rbl()
        .args([
            "--config",
            &config_path(&dir),
            "export",
            "--view",
            "records",
            "--dataset",
            "nappies",
            "--format",
            "json",
            "--file",
            &out.to_string_lossy(),
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["start_date"], "2021-06-01");
    assert_eq!(rows[0]["kind"], "Wet");
    assert_eq!(rows[0]["month"], 0);
    assert_eq!(rows[0]["week"], 2);
}

#[test]
fn test_export_records_requires_dataset() {
    let dir = setup_workspace("cli_export_no_dataset");
    let out = dir.join("records.csv");

    rbl()
        .args([
            "--config",
            &config_path(&dir),
            "export",
            "--view",
            "records",
            "--file",
            &out.to_string_lossy(),
        ])
        .assert()
        .failure()
        .stderr(contains("--dataset is required"));
}

#[test]
fn test_export_refuses_existing_file_without_force() {
    let dir = setup_workspace("cli_export_existing");
    let out = dir.join("minutes.csv");
    fs::write(&out, "keep me").expect("seed file");

    rbl()
        .args([
            "--config",
            &config_path(&dir),
            "export",
            "--view",
            "minutes",
            "--file",
            &out.to_string_lossy(),
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    rbl()
        .args([
            "--config",
            &config_path(&dir),
            "export",
            "--view",
            "minutes",
            "--file",
            &out.to_string_lossy(),
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read");
    assert!(content.starts_with("timestamp,status,date,time,awake"));
    assert!(content.contains("2021-05-15 19:00,asleep,2021-05-15,19:00:00,0.0"));
}
