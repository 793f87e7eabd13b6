use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::JsonStore;
use crate::ui::messages;
use ansi_term::Colour;

/// List all jobs with their pay rate, marking active clock-ins.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = JsonStore::open(&cfg.data_dir)?;
    let registry = store.load_or_create_registry(&Config::default_user_name())?;

    if registry.jobs.is_empty() {
        messages::info("No jobs yet. Create one with `timeclock create <NAME> --pay <RATE>`.");
        return Ok(());
    }

    messages::header(format!("Jobs for {}", registry.name));
    for record in &registry.jobs {
        let shifts = store.load_shifts(&record.filename, &record.name);
        let marker = if shifts.last().is_some_and(|s| s.clocked_in) {
            Colour::Green.bold().paint("*").to_string()
        } else {
            " ".to_string()
        };
        println!("[{}] {} (${:.2}/hr)", marker, record.name, record.pay);
    }
    Ok(())
}
