//! Session analytics configuration.

use serde::{Deserialize, Serialize};

/// Tunables for lap selection and outlier rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LapAnalysisConfig {
    /// A lap is "quick" when its time is below this multiple of the driver's
    /// fastest lap.
    pub quick_lap_threshold: f64,
    /// Quickest laps per driver used for the team speed profile.
    pub fastest_laps_per_driver: usize,
    /// Multiple of the interquartile range beyond the quartiles at which a
    /// value counts as an outlier.
    pub iqr_factor: f64,
}

impl LapAnalysisConfig {
    /// Default quick-lap threshold (107 %).
    pub const DEFAULT_QUICK_LAP_THRESHOLD: f64 = 1.07;
    /// Default lap count per driver for speed profiles.
    pub const DEFAULT_FASTEST_LAPS_PER_DRIVER: usize = 10;
    /// Default Tukey fence factor.
    pub const DEFAULT_IQR_FACTOR: f64 = 1.5;
}

impl Default for LapAnalysisConfig {
    fn default() -> Self {
        Self {
            quick_lap_threshold: Self::DEFAULT_QUICK_LAP_THRESHOLD,
            fastest_laps_per_driver: Self::DEFAULT_FASTEST_LAPS_PER_DRIVER,
            iqr_factor: Self::DEFAULT_IQR_FACTOR,
        }
    }
}
