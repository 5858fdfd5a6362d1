use anyhow::Result;
use clap::Subcommand;
use serde_json::json;

use webstep::DriverConfig;
use webstep::wait::DEFAULT_WAIT;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
}

pub async fn handle_config(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = DriverConfig::load()?;
            let default_wait = config.default_wait().unwrap_or(DEFAULT_WAIT);
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "config": config,
                    "effective_webdriver_url": config.webdriver_url(),
                    "effective_default_wait_ms": default_wait.as_millis() as u64,
                }))?
            );
        }
        ConfigCommands::Path => {
            println!("{}", DriverConfig::config_path()?.display());
        }
    }
    Ok(())
}
