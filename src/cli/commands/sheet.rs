use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timesheet::build_timesheet;
use crate::errors::AppResult;
use crate::models::job::Job;
use crate::storage::JsonStore;
use crate::ui::messages;
use crate::utils::formatting::{bold, money};
use crate::utils::table::Table;

/// Show a job's timesheet: one row per shift plus monthly totals.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sheet { job } = cmd {
        let store = JsonStore::open(&cfg.data_dir)?;
        let registry = store.load_or_create_registry(&Config::default_user_name())?;

        let job = Job::load(&store, &registry, job)?;
        if job.shifts.is_empty() {
            messages::info(format!("No shifts recorded for {}.", job.name));
            return Ok(());
        }

        let sheet = build_timesheet(&job.shifts, job.pay);

        println!(
            "\n{} {} (${:.2}/hr)",
            bold("Timesheet for:"),
            job.name,
            job.pay
        );
        let mut table = Table::new(&["Date", "Start", "End", "Hours", "Notes"]);
        for row in &sheet.rows {
            table.add_row(vec![
                row.date.clone(),
                row.start.clone(),
                row.end.clone(),
                format!("{:.2}", row.hours),
                row.notes.clone(),
            ]);
        }
        print!("{}", table.render());

        println!();
        messages::header("Monthly totals");
        for month in &sheet.months {
            println!(
                "{}: {:.2} hours ({})",
                month.label,
                month.hours,
                money(month.gross)
            );
        }
    }
    Ok(())
}
