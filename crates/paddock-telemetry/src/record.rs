//! One driver's fastest lap, as handed over by the data access layer.

use serde::{Deserialize, Serialize};

use crate::{LapTelemetry, SectorTimes, TelemetryError};

/// A driver's fastest lap: identity, official timing and telemetry trace.
///
/// `lap_time` is `None` when the provider had no valid fastest lap for the
/// driver. Such records are accepted here and excluded by the engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverLapRecord {
    /// Driver abbreviation, used as the key in every result.
    pub driver: String,
    /// Team name, passed through opaquely for labeling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Official lap time in seconds.
    #[serde(default)]
    pub lap_time: Option<f64>,
    /// Official sector splits.
    #[serde(default)]
    pub sectors: SectorTimes,
    /// Telemetry of the lap.
    #[serde(default)]
    pub telemetry: LapTelemetry,
}

impl DriverLapRecord {
    /// Creates a record with a lap time, sectors and telemetry.
    pub fn new(
        driver: impl Into<String>,
        lap_time: f64,
        sectors: SectorTimes,
        telemetry: LapTelemetry,
    ) -> Self {
        Self {
            driver: driver.into(),
            team: None,
            lap_time: Some(lap_time),
            sectors,
            telemetry,
        }
    }

    /// Sets the team name.
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    /// The lap time, if present, finite and positive.
    ///
    /// # Errors
    ///
    /// [`TelemetryError::MissingLapTime`] when absent,
    /// [`TelemetryError::InvalidTime`] when not a positive finite number.
    pub fn valid_lap_time(&self) -> Result<f64, TelemetryError> {
        match self.lap_time {
            None => Err(TelemetryError::MissingLapTime),
            Some(value) if value.is_finite() && value > 0.0 => Ok(value),
            Some(value) => Err(TelemetryError::InvalidTime { field: "lap", value }),
        }
    }

    /// Checks that the record can take part in a distance/time comparison and
    /// returns its lap time.
    ///
    /// Only the distance and time columns are checked; a broken position or
    /// named channel does not disqualify the lap.
    ///
    /// # Errors
    ///
    /// Any lap time or timing column failure.
    pub fn qualify(&self) -> Result<f64, TelemetryError> {
        let lap_time = self.valid_lap_time()?;
        self.telemetry.validate_timing()?;
        Ok(lap_time)
    }
}
