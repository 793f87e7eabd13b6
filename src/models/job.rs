use crate::errors::{AppError, AppResult};
use crate::models::registry::Registry;
use crate::models::shift::Shift;
use crate::storage::JsonStore;
use regex::Regex;

/// A named work context with its own pay rate and shift history.
///
/// Shifts are kept in insertion order. Only the last-appended shift may
/// be open, so the "current shift" is always the last element.
#[derive(Debug)]
pub struct Job {
    pub name: String,
    pub filename: String,
    pub pay: f64,
    pub shifts: Vec<Shift>,
}

impl Job {
    /// Resolve a job by name from the registry and load its shift unit.
    pub fn load(store: &JsonStore, registry: &Registry, name: &str) -> AppResult<Self> {
        let record = registry
            .find(name)
            .ok_or_else(|| AppError::UnknownJob(name.to_string()))?;
        let shifts = store.load_shifts(&record.filename, &record.name);
        Ok(Self {
            name: record.name.clone(),
            filename: record.filename.clone(),
            pay: record.pay,
            shifts,
        })
    }

    /// Storage key for a job: lowercased name with every non-alphanumeric
    /// character squashed to '_', plus the unit extension.
    pub fn storage_key(name: &str) -> String {
        let re = Regex::new(r"[^a-z0-9]").unwrap();
        format!("{}.json", re.replace_all(&name.to_lowercase(), "_"))
    }

    pub fn is_clocked_in(&self) -> bool {
        self.shifts.last().is_some_and(|s| s.clocked_in)
    }
}
