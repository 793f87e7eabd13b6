use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::manual::{ManualEntry, ManualLogic};
use crate::errors::{AppError, AppResult};
use crate::storage::JsonStore;
use crate::ui::messages;
use crate::utils::date::{self, DATE_FMT};
use crate::utils::time;

/// Add a past shift manually.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        job,
        date,
        start,
        end,
        overnight,
        note,
    } = cmd
    {
        //
        // 1. Parse date (default: today)
        //
        let d = match date {
            Some(raw) => {
                date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?
            }
            None => date::today(),
        };

        //
        // 2. Parse start and end times (24h HH:MM)
        //
        let start_time =
            time::parse_time(start).ok_or_else(|| AppError::InvalidTime(start.to_string()))?;
        let end_time =
            time::parse_time(end).ok_or_else(|| AppError::InvalidTime(end.to_string()))?;

        //
        // 3. Open storage and resolve the registry
        //
        let store = JsonStore::open(&cfg.data_dir)?;
        let registry = store.load_or_create_registry(&Config::default_user_name())?;

        //
        // 4. Execute logic
        //
        let entry = ManualEntry {
            date: d,
            start: start_time,
            end: end_time,
            overnight: *overnight,
            notes: note.clone().unwrap_or_default(),
        };
        let shift = ManualLogic::apply(&store, &registry, job, entry)?;

        messages::success(format!(
            "Added shift on {} ({:.2} hours)",
            d.format(DATE_FMT),
            shift.hours
        ));
    }
    Ok(())
}
