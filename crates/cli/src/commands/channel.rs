//! Telemetry channel comparison command

use anyhow::Result;
use paddock_analysis::channel_comparison;
use paddock_telemetry::DriverLapRecord;
use tracing::info;

use crate::commands::ChannelArgs;
use crate::{input, output};

/// Execute the channel command
pub fn execute(args: &ChannelArgs, json: bool) -> Result<()> {
    let records: Vec<DriverLapRecord> = input::read_json(&args.input)?;
    info!(
        drivers = records.len(),
        channel = %args.channel,
        "Comparing telemetry channel"
    );

    let outcome = channel_comparison(&records, &args.channel, args.grid_points);
    output::print_outcome(&outcome, json, output::print_channel)
}
