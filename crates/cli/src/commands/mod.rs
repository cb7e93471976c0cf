//! Command implementations for paddockctl CLI

pub mod channel;
pub mod config;
pub mod delta;
pub mod dominance;
pub mod laps;
pub mod points;
pub mod speed;

use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug)]
pub struct DeltaArgs {
    /// JSON file holding one fastest-lap record per driver
    pub input: PathBuf,

    /// Override the number of grid points
    #[arg(long)]
    pub grid_points: Option<usize>,
}

#[derive(Args, Debug)]
pub struct DominanceArgs {
    /// JSON file holding one fastest-lap record per driver
    pub input: PathBuf,

    /// Override the number of mini-sectors
    #[arg(short, long)]
    pub mini_sectors: Option<usize>,
}

#[derive(Args, Debug)]
pub struct LapsArgs {
    /// JSON file holding every lap of each driver's session
    pub input: PathBuf,

    /// Print box-plot summaries instead of individual laps
    #[arg(short, long)]
    pub summary: bool,

    /// Override the quick-lap threshold (fraction of the fastest lap)
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Args, Debug)]
pub struct SpeedArgs {
    /// JSON file holding every lap of each driver's session, with speed traces
    pub input: PathBuf,

    /// Override how many of each driver's fastest laps are used
    #[arg(long)]
    pub laps_per_driver: Option<usize>,
}

#[derive(Args, Debug)]
pub struct PointsArgs {
    /// JSON file holding the season's round results
    pub input: PathBuf,

    /// Driver to include (repeatable); every driver when omitted
    #[arg(short, long = "driver")]
    pub drivers: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ChannelArgs {
    /// JSON file holding one fastest-lap record per driver
    pub input: PathBuf,

    /// Telemetry channel to compare
    #[arg(short, long, default_value = "speed")]
    pub channel: String,

    /// Resample every trace onto a common grid of this many points
    #[arg(long)]
    pub grid_points: Option<usize>,
}
