//! Championship points progression

use anyhow::Result;
use paddock_analysis::{RoundResult, cumulative_points};
use tracing::info;

use crate::commands::PointsArgs;
use crate::{input, output};

/// Execute the points command
pub fn execute(args: &PointsArgs, json: bool) -> Result<()> {
    let rounds: Vec<RoundResult> = input::read_json(&args.input)?;
    info!(rounds = rounds.len(), drivers = args.drivers.len(), "Accumulating points");

    let outcome = cumulative_points(&rounds, &args.drivers);
    output::print_outcome(&outcome, json, output::print_points)
}
