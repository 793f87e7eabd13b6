//! Timesheet aggregation: sorted display rows plus monthly totals.

use crate::models::shift::Shift;
use crate::utils::date::month_label;
use crate::utils::formatting::truncate;
use crate::utils::time::TIME_FMT;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Notes wider than this are shortened in the table.
const NOTES_WIDTH: usize = 30;

/// One rendered row of the timesheet table.
pub struct SheetRow {
    pub date: String,
    pub start: String,
    pub end: String,
    pub hours: f64,
    pub notes: String,
}

/// Accumulated hours and gross pay for one calendar month.
pub struct MonthTotal {
    pub label: String,
    pub hours: f64,
    pub gross: f64,
}

pub struct Timesheet {
    pub rows: Vec<SheetRow>,
    pub months: Vec<MonthTotal>,
}

/// Build the timesheet for a job's shift sequence.
///
/// Shifts are stable-sorted ascending by start time before grouping, so
/// manual entries inserted out of order still land in the right place.
/// An open shift contributes 0 hours to its month but is shown with an
/// ACTIVE end marker.
pub fn build_timesheet(shifts: &[Shift], pay: f64) -> Timesheet {
    let mut sorted: Vec<&Shift> = shifts.iter().collect();
    sorted.sort_by_key(|s| s.start_time);

    let mut rows = Vec::with_capacity(sorted.len());
    let mut by_month: BTreeMap<(i32, u32), f64> = BTreeMap::new();

    for shift in sorted {
        let start = shift.start_time;
        *by_month.entry((start.year(), start.month())).or_insert(0.0) += shift.hours;

        let end = match shift.end_time {
            Some(end) => end.format(TIME_FMT).to_string(),
            None => "ACTIVE".to_string(),
        };

        rows.push(SheetRow {
            date: start.format("%Y-%m-%d").to_string(),
            start: start.format(TIME_FMT).to_string(),
            end,
            hours: shift.hours,
            notes: truncate(&shift.notes, NOTES_WIDTH),
        });
    }

    let months = by_month
        .into_iter()
        .map(|((year, month), hours)| MonthTotal {
            label: month_label(year, month),
            hours,
            gross: hours * pay,
        })
        .collect();

    Timesheet { rows, months }
}
