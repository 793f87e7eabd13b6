use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::errors::AppResult;
use crate::storage::JsonStore;
use crate::ui::messages;
use crate::utils::time::{self, STAMP_FMT};

/// Clock out of a job: closes the open shift and reports the duration.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Out { job, note } = cmd {
        let store = JsonStore::open(&cfg.data_dir)?;
        let registry = store.load_or_create_registry(&Config::default_user_name())?;

        let summary = ClockLogic::clock_out(&store, &registry, job, time::now(), note.clone())?;

        messages::success(format!("Clocked out at {}", summary.end.format(STAMP_FMT)));
        println!("Duration: {:.2} hours", summary.hours);
    }
    Ok(())
}
