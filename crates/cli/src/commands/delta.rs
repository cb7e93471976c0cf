//! Lap delta command

use anyhow::Result;
use paddock_config::AnalysisConfig;
use paddock_delta::DeltaEngine;
use paddock_telemetry::DriverLapRecord;
use tracing::info;

use crate::commands::DeltaArgs;
use crate::error::CliError;
use crate::{input, output};

/// Execute the delta command
pub fn execute(args: &DeltaArgs, mut config: AnalysisConfig, json: bool) -> Result<()> {
    if let Some(grid_points) = args.grid_points {
        config.delta.grid_points = grid_points;
    }
    config.validate().map_err(CliError::from)?;

    let records: Vec<DriverLapRecord> = input::read_json(&args.input)?;
    info!(drivers = records.len(), "Computing lap delta");

    let outcome = DeltaEngine::new(config.delta).compute(&records);
    output::print_outcome(&outcome, json, output::print_delta)
}
