use chrono::NaiveDate;

/// Format of the manual-entry date prompts.
pub const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}

/// Month label used in the timesheet totals, e.g. "2024-January".
pub fn month_label(year: i32, month: u32) -> String {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    first.format("%Y-%B").to_string()
}
