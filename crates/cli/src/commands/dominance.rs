//! Track dominance command

use anyhow::Result;
use paddock_config::AnalysisConfig;
use paddock_dominance::DominanceEngine;
use paddock_telemetry::DriverLapRecord;
use tracing::info;

use crate::commands::DominanceArgs;
use crate::error::CliError;
use crate::{input, output};

/// Execute the dominance command
pub fn execute(args: &DominanceArgs, mut config: AnalysisConfig, json: bool) -> Result<()> {
    if let Some(mini_sectors) = args.mini_sectors {
        config.dominance.mini_sectors = mini_sectors;
    }
    config.validate().map_err(CliError::from)?;

    let records: Vec<DriverLapRecord> = input::read_json(&args.input)?;
    info!(
        drivers = records.len(),
        mini_sectors = config.dominance.mini_sectors,
        "Computing track dominance"
    );

    let outcome = DominanceEngine::new(config.dominance).compute(&records);
    output::print_outcome(&outcome, json, output::print_dominance)
}
