//! Manual shift entry: a fully-closed shift recorded after the fact.
//!
//! Independent of the clock state; the entry never flips a job between
//! IDLE and ACTIVE. An end time-of-day earlier than the start is an
//! overnight shift, accepted only with explicit confirmation.

use crate::errors::{AppError, AppResult};
use crate::models::job::Job;
use crate::models::registry::Registry;
use crate::models::shift::Shift;
use crate::storage::JsonStore;
use chrono::{Duration, NaiveDate, NaiveTime};

/// A parsed manual entry. The CLI layer resolves the date default and
/// the HH:MM parsing before building one.
pub struct ManualEntry {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub overnight: bool,
    pub notes: String,
}

pub struct ManualLogic;

impl ManualLogic {
    /// Validate the entry, append the closed shift, and persist.
    ///
    /// The shift may land out of chronological order in the sequence;
    /// display-side aggregation re-sorts.
    pub fn apply(
        store: &JsonStore,
        registry: &Registry,
        job_name: &str,
        entry: ManualEntry,
    ) -> AppResult<Shift> {
        let mut job = Job::load(store, registry, job_name)?;

        let start = entry.date.and_time(entry.start);
        let mut end = entry.date.and_time(entry.end);

        if entry.end < entry.start {
            if entry.overnight {
                end += Duration::days(1);
            } else {
                return Err(AppError::EndBeforeStart);
            }
        }

        let shift = Shift::closed(start, end, entry.notes);

        // only the last shift may be open, so an entry recorded while
        // clocked in slots in just before the open shift
        let at = if job.is_clocked_in() {
            job.shifts.len() - 1
        } else {
            job.shifts.len()
        };
        job.shifts.insert(at, shift.clone());

        store.save_shifts(&job.filename, &job.shifts)?;
        Ok(shift)
    }
}
