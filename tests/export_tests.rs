use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{setup_data_dir, setup_job, tc};

/// Create a temporary output file path inside tempdir and ensure it's removed
fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

fn add_sample_shifts(dir: &str) {
    tc().args([
        "--data-dir", dir, "add", "Cafe",
        "--date", "2024-01-10",
        "--in", "09:00",
        "--out", "17:30",
        "--note", "till count",
    ])
    .assert()
    .success();

    tc().args([
        "--data-dir", dir, "add", "Cafe",
        "--date", "2024-01-12",
        "--in", "10:00",
        "--out", "14:00",
    ])
    .assert()
    .success();
}

#[test]
fn test_export_csv() {
    let dir = setup_data_dir("export_csv");
    setup_job(&dir, "Cafe", "12.50");
    add_sample_shifts(&dir);

    let out = temp_out("export_csv", "csv");
    tc().args([
        "--data-dir", &dir, "export", "Cafe",
        "--format", "csv",
        "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("csv export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("date,start,end,hours,notes"));
    assert!(content.contains("2024-01-10,09:00,17:30,8.50,till count"));
    assert!(content.contains("2024-01-12,10:00,14:00,4.00,"));
}

#[test]
fn test_export_json_matches_the_shift_unit_schema() {
    let dir = setup_data_dir("export_json");
    setup_job(&dir, "Cafe", "12.50");
    add_sample_shifts(&dir);

    let out = temp_out("export_json", "json");
    tc().args([
        "--data-dir", &dir, "export", "Cafe",
        "--format", "json",
        "--file", &out,
    ])
    .assert()
    .success();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let shifts = parsed.as_array().unwrap();
    assert_eq!(shifts.len(), 2);
    assert_eq!(shifts[0]["start_time"], "2024-01-10 09:00:00");
    assert_eq!(shifts[0]["hours"].as_f64().unwrap(), 8.5);
    assert_eq!(shifts[0]["notes"], "till count");
}

#[test]
fn test_export_rows_are_chronological() {
    let dir = setup_data_dir("export_sorted");
    setup_job(&dir, "Cafe", "12.50");

    // inserted out of order
    tc().args([
        "--data-dir", &dir, "add", "Cafe",
        "--date", "2024-02-01",
        "--in", "09:00",
        "--out", "10:00",
    ])
    .assert()
    .success();
    tc().args([
        "--data-dir", &dir, "add", "Cafe",
        "--date", "2024-01-01",
        "--in", "09:00",
        "--out", "10:00",
    ])
    .assert()
    .success();

    let out = temp_out("export_sorted", "csv");
    tc().args([
        "--data-dir", &dir, "export", "Cafe",
        "--format", "csv",
        "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    let jan = content.find("2024-01-01").unwrap();
    let feb = content.find("2024-02-01").unwrap();
    assert!(jan < feb);
}

#[test]
fn test_export_refuses_to_overwrite_without_force() {
    let dir = setup_data_dir("export_force");
    setup_job(&dir, "Cafe", "12.50");
    add_sample_shifts(&dir);

    let out = temp_out("export_force", "csv");
    tc().args([
        "--data-dir", &dir, "export", "Cafe",
        "--format", "csv",
        "--file", &out,
    ])
    .assert()
    .success();

    tc().args([
        "--data-dir", &dir, "export", "Cafe",
        "--format", "csv",
        "--file", &out,
    ])
    .assert()
    .failure()
    .stderr(contains("use --force"));

    tc().args([
        "--data-dir", &dir, "export", "Cafe",
        "--format", "csv",
        "--file", &out,
        "--force",
    ])
    .assert()
    .success();
}
