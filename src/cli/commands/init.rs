use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::registry::Registry;
use crate::storage::JsonStore;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the data directory and an empty job registry
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    println!("⚙️  Initializing timeclock…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Data dir    : {}", &cfg.data_dir);

    let store = JsonStore::open(&cfg.data_dir)?;

    if let Some(registry) = store.load_registry() {
        messages::info(format!("Registry already present for {}.", registry.name));
        return Ok(());
    }

    let name = match &cli.command {
        Commands::Init { name } => name.clone(),
        _ => None,
    }
    .unwrap_or_else(Config::default_user_name);

    let registry = Registry::new(&name);
    store.save_registry(&registry)?;

    messages::success(format!(
        "Registry created for {} at {}",
        name,
        store.registry_path().display()
    ));
    Ok(())
}
