#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use weeklog::models::day_schedule::DaySchedule;
use weeklog::models::weekly_template::WeeklyTemplate;

pub fn wl() -> Command {
    cargo_bin_cmd!("weeklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_weeklog.sqlite", name));
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

/// Initialize a test DB through the CLI
pub fn init_db(db_path: &str) {
    wl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// 08:00 / 12:00 / 13:30 / 17:15 → 465 minutes
pub fn full_day() -> DaySchedule {
    DaySchedule::new("08:00", "12:00", "13:30", "17:15")
}

pub fn uniform_template() -> WeeklyTemplate {
    WeeklyTemplate::uniform(full_day())
}

pub fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}
