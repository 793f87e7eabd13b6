//! Clock in/out lifecycle per job.
//!
//! A job is IDLE (no shift, or last shift closed) or ACTIVE (last shift
//! open). Clock-in is valid only from IDLE, clock-out only from ACTIVE;
//! a rejected transition leaves the shift sequence untouched.

use crate::errors::{AppError, AppResult};
use crate::models::job::Job;
use crate::models::registry::Registry;
use crate::models::shift::Shift;
use crate::storage::JsonStore;
use chrono::NaiveDateTime;

/// Result of a successful clock-out, for the caller to render.
pub struct ClockOutSummary {
    pub end: NaiveDateTime,
    pub hours: f64,
}

/// High-level business logic for the clock commands.
pub struct ClockLogic;

impl ClockLogic {
    /// IDLE → ACTIVE: append an open shift starting at `now` and persist.
    pub fn clock_in(
        store: &JsonStore,
        registry: &Registry,
        job_name: &str,
        now: NaiveDateTime,
    ) -> AppResult<NaiveDateTime> {
        let mut job = Job::load(store, registry, job_name)?;

        if job.is_clocked_in() {
            return Err(AppError::AlreadyClockedIn(job.name));
        }

        job.shifts.push(Shift::open(now));
        store.save_shifts(&job.filename, &job.shifts)?;
        Ok(now)
    }

    /// ACTIVE → IDLE: close the last shift at `now`, optionally record
    /// notes, and persist.
    pub fn clock_out(
        store: &JsonStore,
        registry: &Registry,
        job_name: &str,
        now: NaiveDateTime,
        note: Option<String>,
    ) -> AppResult<ClockOutSummary> {
        let mut job = Job::load(store, registry, job_name)?;

        if !job.is_clocked_in() {
            return Err(AppError::NotClockedIn(job.name));
        }
        let Some(current) = job.shifts.last_mut() else {
            return Err(AppError::NotClockedIn(job.name));
        };

        current.clock_out(now);
        if let Some(text) = note {
            current.notes = text;
        }
        let summary = ClockOutSummary {
            end: now,
            hours: current.hours,
        };

        store.save_shifts(&job.filename, &job.shifts)?;
        Ok(summary)
    }

    /// Replace the notes on the last shift, open or closed.
    pub fn edit_note(
        store: &JsonStore,
        registry: &Registry,
        job_name: &str,
        text: &str,
    ) -> AppResult<()> {
        let mut job = Job::load(store, registry, job_name)?;

        let Some(last) = job.shifts.last_mut() else {
            return Err(AppError::NoShifts(job.name));
        };
        last.notes = text.to_string();

        store.save_shifts(&job.filename, &job.shifts)
    }
}
