//! Quick-lap series and lap time distribution

use anyhow::Result;
use paddock_analysis::{DriverSession, lap_series, lap_time_distribution};
use paddock_config::AnalysisConfig;
use tracing::info;

use crate::commands::LapsArgs;
use crate::error::CliError;
use crate::{input, output};

/// Execute the laps command
pub fn execute(args: &LapsArgs, mut config: AnalysisConfig, json: bool) -> Result<()> {
    if let Some(threshold) = args.threshold {
        config.laps.quick_lap_threshold = threshold;
    }
    config.validate().map_err(CliError::from)?;

    let sessions: Vec<DriverSession> = input::read_json(&args.input)?;
    info!(
        drivers = sessions.len(),
        threshold = config.laps.quick_lap_threshold,
        "Selecting quick laps"
    );

    if args.summary {
        let outcome = lap_time_distribution(&sessions, &config.laps);
        output::print_outcome(&outcome, json, output::print_distribution)
    } else {
        let outcome = lap_series(&sessions, &config.laps);
        output::print_outcome(&outcome, json, output::print_lap_series)
    }
}
