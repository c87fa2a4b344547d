#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn att() -> Command {
    cargo_bin_cmd!("attendo")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendo.sqlite", name));
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

/// Initialize DB and create one team (id 1, 09:00-17:00) with one user (id 1)
pub fn init_db_with_team(db_path: &str) {
    att()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    att()
        .args(["--db", db_path, "team", "ops", "--window", "09:00-17:00"])
        .assert()
        .success();

    att()
        .args(["--db", db_path, "user", "ada", "--team", "1"])
        .assert()
        .success();
}

/// Record a punch, panicking on failure.
pub fn punch(db_path: &str, user: &str, at: &str) {
    att()
        .args(["--db", db_path, "punch", user, at])
        .assert()
        .success();
}
