use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timeclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeclock.conf")
    }

    /// Default location of the storage units (registry + shift files)
    pub fn default_data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable file is reported and replaced by defaults.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_yaml::from_str(&raw) {
                Ok(cfg) => cfg,
                Err(_) => {
                    messages::warning("Configuration file could not be parsed, using defaults.");
                    Self::default()
                }
            },
            Err(_) => {
                messages::warning("Configuration file could not be read, using defaults.");
                Self::default()
            }
        }
    }

    /// Initialize the configuration directory, data directory and config
    /// file. A custom data dir (e.g. from --data-dir) is honored; in test
    /// mode the config file on disk is left untouched.
    pub fn init_all(custom_dir: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let data_dir = match custom_dir {
            Some(custom) => expand_tilde(&custom),
            None => Self::default_data_dir(),
        };
        fs::create_dir_all(&data_dir)?;

        let config = Config {
            data_dir: data_dir.to_string_lossy().to_string(),
        };

        if !is_test {
            let yaml =
                serde_yaml::to_string(&config).map_err(|e| AppError::Config(e.to_string()))?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(config)
    }

    /// Registry owner name for first-run setup.
    pub fn default_user_name() -> String {
        env::var("USER")
            .or_else(|_| env::var("USERNAME"))
            .unwrap_or_else(|_| "User".to_string())
    }
}
