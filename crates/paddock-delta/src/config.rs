//! Delta engine configuration.

use serde::{Deserialize, Serialize};

/// Tunables for [`DeltaEngine`](crate::DeltaEngine).
///
/// ```
/// use paddock_delta::DeltaConfig;
///
/// let config = DeltaConfig::default();
/// assert_eq!(config.grid_points, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaConfig {
    /// Number of points in the common distance grid.
    pub grid_points: usize,
    /// Shortest common distance range (meters) worth computing a curve over.
    pub min_common_distance: f64,
}

impl DeltaConfig {
    /// Default number of grid points.
    pub const DEFAULT_GRID_POINTS: usize = 500;

    /// Default minimum common distance in meters.
    pub const DEFAULT_MIN_COMMON_DISTANCE: f64 = 1e-3;
}

impl Default for DeltaConfig {
    fn default() -> Self {
        Self {
            grid_points: Self::DEFAULT_GRID_POINTS,
            min_common_distance: Self::DEFAULT_MIN_COMMON_DISTANCE,
        }
    }
}
