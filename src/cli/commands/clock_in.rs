use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::errors::AppResult;
use crate::storage::JsonStore;
use crate::ui::messages;
use crate::utils::time::{self, STAMP_FMT};

/// Clock in to a job: opens a new shift starting now.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::In { job } = cmd {
        let store = JsonStore::open(&cfg.data_dir)?;
        let registry = store.load_or_create_registry(&Config::default_user_name())?;

        let start = ClockLogic::clock_in(&store, &registry, job, time::now())?;

        messages::success(format!(
            "Clocked in to {} at {}",
            job,
            start.format(STAMP_FMT)
        ));
    }
    Ok(())
}
