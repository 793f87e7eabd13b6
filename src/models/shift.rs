use crate::utils::time::{self, stamp, stamp_opt};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One contiguous work session, from clock-in to clock-out.
///
/// `clocked_in` is true exactly while `end_time` is unset. `hours` is
/// derived from the two timestamps and stays 0 while the shift is open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    #[serde(with = "stamp")]
    pub start_time: NaiveDateTime, // ⇔ "YYYY-MM-DD HH:MM:SS"
    #[serde(with = "stamp_opt", default)]
    pub end_time: Option<NaiveDateTime>, // null while the shift is open
    pub hours: f64,
    pub clocked_in: bool,
    #[serde(default)]
    pub notes: String,
}

impl Shift {
    /// A freshly opened shift starting now (or at the given instant).
    pub fn open(start: NaiveDateTime) -> Self {
        Self {
            start_time: start,
            end_time: None,
            hours: 0.0,
            clocked_in: true,
            notes: String::new(),
        }
    }

    /// A fully-closed shift, used by the manual-entry path.
    pub fn closed(start: NaiveDateTime, end: NaiveDateTime, notes: String) -> Self {
        let mut shift = Self {
            start_time: start,
            end_time: Some(end),
            hours: 0.0,
            clocked_in: false,
            notes,
        };
        shift.recalculate_hours();
        shift
    }

    /// Close the shift at `end`. Callers check the open state first; the
    /// job-level state machine owns that rule.
    pub fn clock_out(&mut self, end: NaiveDateTime) {
        self.end_time = Some(end);
        self.clocked_in = false;
        self.recalculate_hours();
    }

    /// Pure in start/end and idempotent. Both the clock-out and the
    /// manual path go through here so the rounding is identical.
    pub fn recalculate_hours(&mut self) {
        if let Some(end) = self.end_time {
            self.hours = time::hours_between(self.start_time, end);
        }
    }
}
