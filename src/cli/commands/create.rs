use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::JsonStore;
use crate::ui::messages;

/// Create a new job and persist both its empty shift unit and the
/// updated registry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Create { name, pay } = cmd {
        let store = JsonStore::open(&cfg.data_dir)?;
        let mut registry = store.load_or_create_registry(&Config::default_user_name())?;

        let record = registry.add_job(name, *pay)?;

        store.save_shifts(&record.filename, &[])?;
        store.save_registry(&registry)?;

        messages::success(format!(
            "Job '{}' added (${:.2}/hr)",
            record.name, record.pay
        ));
    }
    Ok(())
}
