use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timeclock
/// CLI application to track shifts per job and review monthly hours and pay
#[derive(Parser)]
#[command(
    name = "timeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time clock: clock in and out per job, log past shifts, and review monthly hours and pay",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or custom locations)
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty job registry
    Init {
        /// Registry owner name (default: the current OS user)
        #[arg(long)]
        name: Option<String>,
    },

    /// Manage the configuration file (view or locate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Create a new job with an hourly pay rate
    Create {
        /// Job name (unique, case-insensitive)
        name: String,

        /// Hourly pay rate
        #[arg(long)]
        pay: f64,
    },

    /// List all jobs, marking the ones currently clocked in
    Jobs,

    /// Clock in to a job
    In {
        /// Job name
        job: String,
    },

    /// Clock out of a job
    Out {
        /// Job name
        job: String,

        /// Notes to attach to the closed shift
        #[arg(long)]
        note: Option<String>,
    },

    /// Add a past shift manually
    Add {
        /// Job name
        job: String,

        /// Date of the shift (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long = "in", value_name = "HH:MM")]
        start: String,

        /// End time (HH:MM)
        #[arg(long = "out", value_name = "HH:MM")]
        end: String,

        /// Confirm a shift ending the next day
        #[arg(long)]
        overnight: bool,

        /// Notes for the shift
        #[arg(long)]
        note: Option<String>,
    },

    /// Add or replace the notes on the last shift
    Note {
        /// Job name
        job: String,

        /// Note text
        text: String,
    },

    /// Show the timesheet with monthly totals
    Sheet {
        /// Job name
        job: String,
    },

    /// Export a job's shifts to a file
    Export {
        /// Job name
        job: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite the output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
