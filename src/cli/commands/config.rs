use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Show the active configuration or the config file location.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
        }

        // printing the configuration is the default action
        if *print_config || !*path {
            let config = Config::load();
            println!("📄 Current configuration:");
            println!(
                "{}",
                serde_yaml::to_string(&config).map_err(|e| AppError::Config(e.to_string()))?
            );
        }
    }
    Ok(())
}
