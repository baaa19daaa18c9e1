#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rservicelog::models::{Entry, NewEntry};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsl() -> Command {
    cargo_bin_cmd!("rservicelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rservicelog.sqlite", name));
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

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn job(date: &str, master: &str, work: f64, parts: f64) -> NewEntry {
    NewEntry {
        date: date.to_string(),
        master: master.to_string(),
        car: format!("Car of {master}"),
        services: vec!["Замена масла".to_string()],
        work_cost: work,
        parts_markup: parts,
    }
}

pub fn entry(id: i64, date: &str, master: &str, work: f64, parts: f64) -> Entry {
    job(date, master, work, parts).with_id(id)
}

/// Initialize DB, register two masters and record three jobs via CLI
pub fn init_db_with_data(db_path: &str) {
    rsl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for m in ["Ivan", "Petr"] {
        rsl()
            .args(["--db", db_path, "master", "add", m])
            .assert()
            .success();
    }

    rsl()
        .args([
            "--db",
            db_path,
            "add",
            "2025-01-05",
            "Ivan",
            "Lada Vesta, white",
            "-s",
            "Замена масла",
            "-s",
            "Развал-схождение",
            "--work",
            "100",
            "--parts",
            "50",
        ])
        .assert()
        .success();

    rsl()
        .args([
            "--db",
            db_path,
            "add",
            "2025-01-06",
            "Petr",
            "Kia \"Rio\"",
            "--work",
            "200",
        ])
        .assert()
        .success();

    rsl()
        .args([
            "--db",
            db_path,
            "add",
            "2025-02-10",
            "Ivan",
            "Toyota Camry",
            "--work",
            "80",
            "--parts",
            "20",
        ])
        .assert()
        .success();
}
