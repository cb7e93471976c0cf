//! Official sector splits.

use serde::{Deserialize, Serialize};

/// Official sector split durations for one lap, in seconds.
///
/// The timing feed reports each sector separately and any of them may be
/// missing. Cumulative boundary times are only available when all three are
/// present and positive.
///
/// # Examples
///
/// ```
/// use paddock_telemetry::SectorTimes;
///
/// let sectors = SectorTimes::from_cumulative(20.0, 35.0, 50.0);
/// let cumulative = sectors.cumulative().ok_or("incomplete sectors")?;
/// assert!((cumulative.s2 - 35.0).abs() < 1e-12);
///
/// assert!(SectorTimes::new(Some(20.0), None, Some(15.0)).cumulative().is_none());
/// # Ok::<(), &str>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectorTimes {
    /// Sector 1 duration.
    #[serde(default)]
    pub sector1: Option<f64>,
    /// Sector 2 duration.
    #[serde(default)]
    pub sector2: Option<f64>,
    /// Sector 3 duration.
    #[serde(default)]
    pub sector3: Option<f64>,
}

/// Elapsed lap time at each official sector boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativeSectors {
    /// End of sector 1.
    pub s1: f64,
    /// End of sector 2.
    pub s2: f64,
    /// End of sector 3 (the sum of all splits).
    pub s3: f64,
}

impl SectorTimes {
    /// Creates sector times from individual split durations.
    pub fn new(sector1: Option<f64>, sector2: Option<f64>, sector3: Option<f64>) -> Self {
        Self {
            sector1,
            sector2,
            sector3,
        }
    }

    /// Creates complete sector times from three split durations.
    pub fn from_splits(sector1: f64, sector2: f64, sector3: f64) -> Self {
        Self::new(Some(sector1), Some(sector2), Some(sector3))
    }

    /// Creates complete sector times from cumulative boundary times.
    pub fn from_cumulative(s1: f64, s2: f64, s3: f64) -> Self {
        Self::from_splits(s1, s2 - s1, s3 - s2)
    }

    /// No sector information at all.
    pub fn missing() -> Self {
        Self::default()
    }

    /// Cumulative boundary times, or `None` unless every split is a positive
    /// finite number.
    pub fn cumulative(&self) -> Option<CumulativeSectors> {
        let s1 = valid_split(self.sector1)?;
        let s2 = valid_split(self.sector2)?;
        let s3 = valid_split(self.sector3)?;
        Some(CumulativeSectors {
            s1,
            s2: s1 + s2,
            s3: s1 + s2 + s3,
        })
    }

    /// `true` when [`cumulative`](Self::cumulative) is available.
    pub fn is_complete(&self) -> bool {
        self.cumulative().is_some()
    }
}

fn valid_split(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}
