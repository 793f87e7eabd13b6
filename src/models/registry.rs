use crate::errors::{AppError, AppResult};
use crate::models::job::Job;
use serde::{Deserialize, Serialize};

/// Job descriptor kept in the registry unit. Shift data lives in the
/// job's own storage unit, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub name: String,
    pub filename: String,
    pub pay: f64,
}

/// The single local user's job index.
#[derive(Debug, Serialize, Deserialize)]
pub struct Registry {
    pub name: String,
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
}

impl Registry {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            jobs: Vec::new(),
        }
    }

    /// Job names are unique case-insensitively.
    pub fn find(&self, name: &str) -> Option<&JobRecord> {
        self.jobs
            .iter()
            .find(|j| j.name.eq_ignore_ascii_case(name))
    }

    /// Validate and register a new job, deriving its storage key from
    /// the name. The caller persists both the new (empty) shift unit and
    /// the updated registry.
    pub fn add_job(&mut self, name: &str, pay: f64) -> AppResult<JobRecord> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyJobName);
        }
        if self.find(name).is_some() {
            return Err(AppError::DuplicateJob(name.to_string()));
        }
        if pay < 0.0 {
            return Err(AppError::InvalidPay(format!("{}", pay)));
        }

        let record = JobRecord {
            name: name.to_string(),
            filename: Job::storage_key(name),
            pay,
        };
        self.jobs.push(record.clone());
        Ok(record)
    }
}
