//! Session analytics around the delta and dominance engines.
//!
//! - [`laps`]: quick-lap series and lap-time distributions
//! - [`speed`]: team average-versus-top speed profiles
//! - [`points`]: cumulative championship points
//! - [`channels`]: per-driver channel traces against distance
//! - [`stats`]: percentiles, Tukey fences and box summaries
//!
//! Like the engines, every entry point returns an
//! [`Outcome`](paddock_errors::Outcome) and reports "nothing qualified" as
//! insufficient data.

#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod channels;
pub mod config;
pub mod laps;
pub mod points;
pub mod session;
pub mod speed;
pub mod stats;

pub use channels::{ChannelComparison, ChannelTrace, channel_comparison};
pub use config::LapAnalysisConfig;
pub use laps::{
    CompoundDistribution, DistributionReport, LapDistribution, LapPoint, LapSeries,
    LapSeriesReport, lap_series, lap_time_distribution,
};
pub use points::{PointsProgression, PointsReport, RoundTotal, cumulative_points};
pub use session::{DriverPoints, DriverSession, RoundResult, SessionLap};
pub use speed::{LapSpeed, SpeedProfile, TeamSpeed, team_speed_profile};
pub use stats::{BoxSummary, Fences, percentile};
