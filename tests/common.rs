#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tc() -> Command {
    cargo_bin_cmd!("timeclock")
}

/// Create a unique test data dir inside the system temp dir and remove any leftover
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeclock", name));
    let dir = path.to_string_lossy().to_string();
    fs::remove_dir_all(&dir).ok();
    dir
}

/// Initialize a registry and create one job, useful for many tests
pub fn setup_job(dir: &str, job: &str, pay: &str) {
    tc().args(["--data-dir", dir, "--test", "init", "--name", "Tester"])
        .assert()
        .success();

    tc().args(["--data-dir", dir, "create", job, "--pay", pay])
        .assert()
        .success();
}

/// Read a job's shift unit as parsed JSON
pub fn read_shift_unit(dir: &str, filename: &str) -> serde_json::Value {
    let raw = fs::read_to_string(format!("{}/{}", dir, filename)).expect("shift unit missing");
    serde_json::from_str(&raw).expect("shift unit is not valid JSON")
}

/// Read the registry unit as parsed JSON
pub fn read_registry(dir: &str) -> serde_json::Value {
    let raw = fs::read_to_string(format!("{}/user.json", dir)).expect("registry missing");
    serde_json::from_str(&raw).expect("registry is not valid JSON")
}
