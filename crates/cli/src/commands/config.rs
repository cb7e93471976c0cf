//! Show the effective configuration

use anyhow::Result;
use paddock_config::AnalysisConfig;

/// Execute the config command
pub fn execute(config: &AnalysisConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", serde_yaml::to_string(config)?);
    }
    Ok(())
}
