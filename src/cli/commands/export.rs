use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success, write_csv, write_json};
use crate::models::job::Job;
use crate::storage::JsonStore;
use std::path::Path;

/// Export a job's shifts to a CSV or JSON file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        job,
        format,
        file,
        force,
    } = cmd
    {
        let store = JsonStore::open(&cfg.data_dir)?;
        let registry = store.load_or_create_registry(&Config::default_user_name())?;

        let mut job = Job::load(&store, &registry, job)?;
        job.shifts.sort_by_key(|s| s.start_time);

        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                file
            )));
        }

        match format {
            ExportFormat::Csv => write_csv(file, &job.shifts)?,
            ExportFormat::Json => write_json(file, &job.shifts)?,
        }

        notify_export_success(format.as_str(), path);
    }
    Ok(())
}
