//! Team speed profile command

use anyhow::Result;
use paddock_analysis::{DriverSession, team_speed_profile};
use paddock_config::AnalysisConfig;
use tracing::info;

use crate::commands::SpeedArgs;
use crate::error::CliError;
use crate::{input, output};

/// Execute the speed command
pub fn execute(args: &SpeedArgs, mut config: AnalysisConfig, json: bool) -> Result<()> {
    if let Some(laps) = args.laps_per_driver {
        config.laps.fastest_laps_per_driver = laps;
    }
    config.validate().map_err(CliError::from)?;

    let sessions: Vec<DriverSession> = input::read_json(&args.input)?;
    info!(drivers = sessions.len(), "Building team speed profile");

    let outcome = team_speed_profile(&sessions, &config.laps);
    output::print_outcome(&outcome, json, output::print_speed_profile)
}
