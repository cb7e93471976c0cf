//! Where the reference lap crosses the official sector boundaries.

use paddock_resample::first_index_at_or_above;
use paddock_telemetry::{CumulativeSectors, LapTelemetry};
use serde::{Deserialize, Serialize};

/// Distances at which the reference driver's elapsed time first reaches the
/// end of sector 1 and sector 2.
///
/// Either may be absent when the reference has no complete sector times or
/// its telemetry never reaches the sector time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectorBoundaries {
    /// End of sector 1, meters.
    #[serde(rename = "S1")]
    pub s1: Option<f64>,
    /// End of sector 2, meters.
    #[serde(rename = "S2")]
    pub s2: Option<f64>,
}

impl SectorBoundaries {
    /// Locates the boundaries on a lap's own telemetry.
    pub fn locate(telemetry: &LapTelemetry, cumulative: Option<CumulativeSectors>) -> Self {
        let Some(cumulative) = cumulative else {
            return Self::default();
        };
        let distance_when = |sector_time: f64| {
            first_index_at_or_above(&telemetry.time, sector_time)
                .and_then(|index| telemetry.distance.get(index).copied())
        };
        Self {
            s1: distance_when(cumulative.s1),
            s2: distance_when(cumulative.s2),
        }
    }

    /// Both boundaries, when they split `(0, max_distance)` into three
    /// non-empty pieces. Anchoring a correction at unordered boundaries
    /// would fold the residual curve back on itself.
    pub fn anchor_distances(&self, max_distance: f64) -> Option<(f64, f64)> {
        match (self.s1, self.s2) {
            (Some(s1), Some(s2)) if 0.0 < s1 && s1 < s2 && s2 < max_distance => Some((s1, s2)),
            _ => None,
        }
    }
}
