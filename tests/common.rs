#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;
use timeflow::models::time_entry::TimeEntry;

pub fn tf() -> Command {
    cargo_bin_cmd!("timeflow")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeflow.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Local instant in September 2025 (no DST change in that month for the
/// usual test time zones). 2025-09-01 is a Monday.
pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 9, day, hour, minute, 0)
        .single()
        .expect("unambiguous local time")
}

pub fn closed(id: &str, clock_in: DateTime<Local>, clock_out: DateTime<Local>) -> TimeEntry {
    TimeEntry {
        id: id.to_string(),
        clock_in,
        clock_out: Some(clock_out),
    }
}

pub fn open(id: &str, clock_in: DateTime<Local>) -> TimeEntry {
    TimeEntry {
        id: id.to_string(),
        clock_in,
        clock_out: None,
    }
}

pub const HOUR: i64 = 3_600_000;
pub const MINUTE: i64 = 60_000;

/// Init a test DB and add the two sessions of 2025-09-01:
/// 09:00–12:00 and 13:00–17:00.
pub fn init_db_with_data(db_path: &str) {
    tf().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (start, end) in [
        ("2025-09-01 09:00", "2025-09-01 12:00"),
        ("2025-09-01 13:00", "2025-09-01 17:00"),
    ] {
        tf().args([
            "--db", db_path, "--test", "add", "--in", start, "--out", end,
        ])
        .assert()
        .success();
    }
}

/// Short id printed by `add` ("Entry <id> saved: …").
pub fn saved_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    text.split("Entry ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .expect("entry id in output")
        .to_string()
}
