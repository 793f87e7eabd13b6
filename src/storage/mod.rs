//! JSON storage units: one registry file plus one shift file per job.
//!
//! Every write is a whole-file overwrite of the unit. There is no
//! locking and no transactional guarantee across the registry and a
//! job's shift unit; the model assumes single-process exclusive access.

use crate::errors::AppResult;
use crate::models::registry::Registry;
use crate::models::shift::Shift;
use crate::ui::messages;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the registry unit inside the data directory.
pub const REGISTRY_FILE: &str = "user.json";

/// Storage port handed to the logic layer. Constructed from the
/// configured data directory; nothing else reaches the filesystem.
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Open the store, creating the data directory if missing.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> AppResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn registry_path(&self) -> PathBuf {
        self.data_dir.join(REGISTRY_FILE)
    }

    pub fn shift_path(&self, filename: &str) -> PathBuf {
        self.data_dir.join(filename)
    }

    /// Read the registry unit. `None` means first run: the unit is
    /// missing, or unreadable (reported, then treated like a first run
    /// so the next save rewrites it).
    pub fn load_registry(&self) -> Option<Registry> {
        let path = self.registry_path();
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(registry) => Some(registry),
                Err(_) => {
                    messages::warning("Registry file could not be read, starting fresh.");
                    None
                }
            },
            Err(_) => {
                messages::warning("Registry file could not be read, starting fresh.");
                None
            }
        }
    }

    /// Load the registry, or run first-run setup: create an empty
    /// registry for `default_name` and persist it.
    pub fn load_or_create_registry(&self, default_name: &str) -> AppResult<Registry> {
        if let Some(registry) = self.load_registry() {
            return Ok(registry);
        }
        let registry = Registry::new(default_name);
        self.save_registry(&registry)?;
        messages::info(format!("Created a new registry for {}.", default_name));
        Ok(registry)
    }

    pub fn save_registry(&self, registry: &Registry) -> AppResult<()> {
        let json = serde_json::to_string_pretty(registry)?;
        fs::write(self.registry_path(), json)?;
        Ok(())
    }

    /// Read a job's shift unit. A missing unit is an empty history; an
    /// unreadable one is reported and treated as empty (the next save
    /// rewrites the unit).
    pub fn load_shifts(&self, filename: &str, job_name: &str) -> Vec<Shift> {
        let path = self.shift_path(filename);
        if !path.exists() {
            return Vec::new();
        }
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(shifts) => shifts,
                Err(_) => {
                    messages::warning(format!(
                        "Shift data for {} could not be read, treating it as empty.",
                        job_name
                    ));
                    Vec::new()
                }
            },
            Err(_) => {
                messages::warning(format!(
                    "Shift data for {} could not be read, treating it as empty.",
                    job_name
                ));
                Vec::new()
            }
        }
    }

    pub fn save_shifts(&self, filename: &str, shifts: &[Shift]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(shifts)?;
        fs::write(self.shift_path(filename), json)?;
        Ok(())
    }
}
