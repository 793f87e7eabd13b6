use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::errors::AppResult;
use crate::storage::JsonStore;
use crate::ui::messages;

/// Replace the notes on a job's last shift.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Note { job, text } = cmd {
        let store = JsonStore::open(&cfg.data_dir)?;
        let registry = store.load_or_create_registry(&Config::default_user_name())?;

        ClockLogic::edit_note(&store, &registry, job, text)?;

        messages::success(format!("Notes updated for {}", job));
    }
    Ok(())
}
