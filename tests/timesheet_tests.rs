use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};

mod common;
use common::{setup_data_dir, setup_job, tc};

#[test]
fn test_monthly_totals_with_gross_pay() {
    let dir = setup_data_dir("sheet_monthly");
    setup_job(&dir, "Cafe", "10");

    tc().args([
        "--data-dir", &dir, "add", "Cafe",
        "--date", "2024-01-05",
        "--in", "09:00",
        "--out", "14:00",
    ])
    .assert()
    .success();

    tc().args([
        "--data-dir", &dir, "add", "Cafe",
        "--date", "2024-02-03",
        "--in", "09:00",
        "--out", "12:00",
    ])
    .assert()
    .success();

    tc().args(["--data-dir", &dir, "sheet", "Cafe"])
        .assert()
        .success()
        .stdout(contains("2024-January: 5.00 hours ($50.00)"))
        .stdout(contains("2024-February: 3.00 hours ($30.00)"));
}

#[test]
fn test_months_ascend_regardless_of_insertion_order() {
    let dir = setup_data_dir("sheet_order");
    setup_job(&dir, "Cafe", "10");

    // later month entered first
    tc().args([
        "--data-dir", &dir, "add", "Cafe",
        "--date", "2024-02-03",
        "--in", "09:00",
        "--out", "12:00",
    ])
    .assert()
    .success();

    tc().args([
        "--data-dir", &dir, "add", "Cafe",
        "--date", "2024-01-05",
        "--in", "09:00",
        "--out", "14:00",
    ])
    .assert()
    .success();

    tc().args(["--data-dir", &dir, "sheet", "Cafe"])
        .assert()
        .success()
        // rows sorted by start time
        .stdout(is_match(r"(?s)2024-01-05.*2024-02-03").expect("Invalid regex"))
        // month groups in ascending chronological order
        .stdout(is_match(r"(?s)2024-January.*2024-February").expect("Invalid regex"));
}

#[test]
fn test_month_totals_accumulate_within_a_month() {
    let dir = setup_data_dir("sheet_accumulate");
    setup_job(&dir, "Cafe", "10");

    for (start, end) in [("09:00", "11:30"), ("13:00", "17:15"), ("18:00", "19:00")] {
        tc().args([
            "--data-dir", &dir, "add", "Cafe",
            "--date", "2024-03-08",
            "--in", start,
            "--out", end,
        ])
        .assert()
        .success();
    }

    // 2.50 + 4.25 + 1.00 = 7.75 hours, no double counting or omission
    tc().args(["--data-dir", &dir, "sheet", "Cafe"])
        .assert()
        .success()
        .stdout(contains("2024-March: 7.75 hours ($77.50)"));
}

#[test]
fn test_open_shift_shows_active_and_counts_zero_hours() {
    let dir = setup_data_dir("sheet_active");
    setup_job(&dir, "Cafe", "10");

    tc().args(["--data-dir", &dir, "in", "Cafe"])
        .assert()
        .success();

    tc().args(["--data-dir", &dir, "sheet", "Cafe"])
        .assert()
        .success()
        .stdout(contains("ACTIVE"))
        .stdout(contains("0.00 hours ($0.00)"));
}

#[test]
fn test_empty_timesheet() {
    let dir = setup_data_dir("sheet_empty");
    setup_job(&dir, "Cafe", "10");

    tc().args(["--data-dir", &dir, "sheet", "Cafe"])
        .assert()
        .success()
        .stdout(contains("No shifts recorded for Cafe"))
        .stdout(contains("ACTIVE").not());
}

#[test]
fn test_long_notes_are_truncated_in_the_table() {
    let dir = setup_data_dir("sheet_truncate");
    setup_job(&dir, "Cafe", "10");

    let long_note = "inventory day plus deep clean of the espresso machines";
    tc().args([
        "--data-dir", &dir, "add", "Cafe",
        "--date", "2024-01-05",
        "--in", "09:00",
        "--out", "14:00",
        "--note", long_note,
    ])
    .assert()
    .success();

    tc().args(["--data-dir", &dir, "sheet", "Cafe"])
        .assert()
        .success()
        .stdout(contains("inventory day plus deep clean ..."))
        .stdout(contains(long_note).not());
}
