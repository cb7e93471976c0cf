//! Columnar per-lap telemetry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::TelemetryError;

/// Minimum number of samples any interpolation over a lap needs.
pub const MIN_SAMPLES: usize = 2;

/// Name of the distance column in validation errors.
pub const DISTANCE: &str = "distance";
/// Name of the elapsed-time column in validation errors.
pub const TIME: &str = "time";
/// Name of the X position column.
pub const POSITION_X: &str = "x";
/// Name of the Y position column.
pub const POSITION_Y: &str = "y";

/// One lap of telemetry, stored column by column.
///
/// `distance` (meters from the start line) and `time` (seconds since lap
/// start) are always present. Track position and named channels such as
/// `speed` or `throttle` are optional. Every column has one value per
/// sample.
///
/// Deserialized values are not trusted: call [`validate`](Self::validate)
/// before using a lap for computation. The builder methods validate as they
/// go.
///
/// # Examples
///
/// ```
/// use paddock_telemetry::LapTelemetry;
///
/// let lap = LapTelemetry::new(vec![0.0, 50.0, 100.0], vec![0.0, 1.0, 2.0])?
///     .with_position(vec![0.0, 1.0, 2.0], vec![0.0, 0.0, 0.0])?
///     .with_channel("speed", vec![180.0, 180.0, 180.0])?;
///
/// assert_eq!(lap.len(), 3);
/// assert_eq!(lap.max_distance(), Some(100.0));
/// assert!(lap.channel("speed").is_some());
/// # Ok::<(), paddock_telemetry::TelemetryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LapTelemetry {
    /// Distance from the start line in meters, non-decreasing.
    pub distance: Vec<f64>,
    /// Elapsed lap time in seconds, non-decreasing.
    pub time: Vec<f64>,
    /// Track X coordinate, if the provider supplied position data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<f64>>,
    /// Track Y coordinate, if the provider supplied position data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<f64>>,
    /// Additional named channels (speed, throttle, brake, rpm, gear, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub channels: BTreeMap<String, Vec<f64>>,
}

impl LapTelemetry {
    /// Creates a lap from its distance and time columns.
    ///
    /// # Errors
    ///
    /// Returns a [`TelemetryError`] when the columns are shorter than
    /// [`MIN_SAMPLES`], differ in length, hold non-finite values or decrease.
    pub fn new(distance: Vec<f64>, time: Vec<f64>) -> Result<Self, TelemetryError> {
        let lap = Self {
            distance,
            time,
            ..Self::default()
        };
        lap.validate()?;
        Ok(lap)
    }

    /// Attaches X/Y track position columns.
    ///
    /// # Errors
    ///
    /// Returns a [`TelemetryError`] when either column has the wrong length
    /// or holds non-finite values.
    pub fn with_position(mut self, x: Vec<f64>, y: Vec<f64>) -> Result<Self, TelemetryError> {
        check_column(POSITION_X, &x, self.distance.len())?;
        check_column(POSITION_Y, &y, self.distance.len())?;
        self.x = Some(x);
        self.y = Some(y);
        Ok(self)
    }

    /// Attaches a named channel.
    ///
    /// # Errors
    ///
    /// Returns a [`TelemetryError`] when the column has the wrong length or
    /// holds non-finite values.
    pub fn with_channel(
        mut self,
        name: impl Into<String>,
        values: Vec<f64>,
    ) -> Result<Self, TelemetryError> {
        let name = name.into();
        check_column(&name, &values, self.distance.len())?;
        self.channels.insert(name, values);
        Ok(self)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.distance.len()
    }

    /// `true` when the lap has no samples.
    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }

    /// Largest distance covered, i.e. the last distance sample.
    pub fn max_distance(&self) -> Option<f64> {
        self.distance.last().copied()
    }

    /// Elapsed time at the last sample.
    pub fn final_time(&self) -> Option<f64> {
        self.time.last().copied()
    }

    /// Position columns, if both are present.
    pub fn position(&self) -> Option<(&[f64], &[f64])> {
        match (&self.x, &self.y) {
            (Some(x), Some(y)) => Some((x.as_slice(), y.as_slice())),
            _ => None,
        }
    }

    /// A named channel, if present.
    pub fn channel(&self, name: &str) -> Option<&[f64]> {
        self.channels.get(name).map(Vec::as_slice)
    }

    /// Checks the distance and time columns only.
    ///
    /// Enough for a distance/time comparison; optional columns are not
    /// looked at.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate_timing(&self) -> Result<(), TelemetryError> {
        let len = self.distance.len();
        if len < MIN_SAMPLES {
            return Err(TelemetryError::TooFewSamples {
                actual: len,
                min: MIN_SAMPLES,
            });
        }
        check_column(DISTANCE, &self.distance, len)?;
        check_column(TIME, &self.time, len)?;
        check_non_decreasing(DISTANCE, &self.distance)?;
        check_non_decreasing(TIME, &self.time)?;
        Ok(())
    }

    /// Checks the distance/time invariants and every optional column.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), TelemetryError> {
        self.validate_timing()?;
        let len = self.distance.len();
        if let Some(x) = &self.x {
            check_column(POSITION_X, x, len)?;
        }
        if let Some(y) = &self.y {
            check_column(POSITION_Y, y, len)?;
        }
        for (name, values) in &self.channels {
            check_column(name, values, len)?;
        }
        Ok(())
    }

    /// Validates the timing and position columns and returns X/Y.
    ///
    /// Named channels are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::MissingChannel`] when either position column
    /// is absent, or any error from [`validate_timing`](Self::validate_timing)
    /// or from checking the position columns.
    pub fn validated_position(&self) -> Result<(&[f64], &[f64]), TelemetryError> {
        self.validate_timing()?;
        let len = self.distance.len();
        match (&self.x, &self.y) {
            (Some(x), Some(y)) => {
                check_column(POSITION_X, x, len)?;
                check_column(POSITION_Y, y, len)?;
                Ok((x.as_slice(), y.as_slice()))
            }
            (None, _) => Err(TelemetryError::MissingChannel(POSITION_X.to_string())),
            (_, None) => Err(TelemetryError::MissingChannel(POSITION_Y.to_string())),
        }
    }

    /// Validates the timing columns and the channel `name`, and returns it.
    ///
    /// Other channels and position are not checked.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::MissingChannel`] when the channel is absent,
    /// or the first violated invariant of the timing columns or the channel.
    pub fn validated_channel(&self, name: &str) -> Result<&[f64], TelemetryError> {
        self.validate_timing()?;
        let values = self
            .channel(name)
            .ok_or_else(|| TelemetryError::MissingChannel(name.to_string()))?;
        check_column(name, values, self.distance.len())?;
        Ok(values)
    }
}

fn check_column(name: &str, values: &[f64], expected: usize) -> Result<(), TelemetryError> {
    if values.len() != expected {
        return Err(TelemetryError::LengthMismatch {
            channel: name.to_string(),
            expected,
            actual: values.len(),
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(TelemetryError::NonFinite {
            channel: name.to_string(),
            index,
        });
    }
    Ok(())
}

fn check_non_decreasing(name: &str, values: &[f64]) -> Result<(), TelemetryError> {
    match values.windows(2).position(|pair| matches!(pair, [a, b] if b < a)) {
        Some(index) => Err(TelemetryError::NotMonotonic {
            channel: name.to_string(),
            index: index.saturating_add(1),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), TelemetryError>;

    #[test]
    fn test_new_rejects_single_sample() {
        let result = LapTelemetry::new(vec![0.0], vec![0.0]);
        assert_eq!(
            result,
            Err(TelemetryError::TooFewSamples { actual: 1, min: 2 })
        );
    }

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let result = LapTelemetry::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0]);
        assert!(matches!(result, Err(TelemetryError::LengthMismatch { .. })));
    }

    #[test]
    fn test_new_rejects_decreasing_distance() {
        let result = LapTelemetry::new(vec![0.0, 10.0, 5.0], vec![0.0, 1.0, 2.0]);
        assert_eq!(
            result,
            Err(TelemetryError::NotMonotonic {
                channel: "distance".to_string(),
                index: 2
            })
        );
    }

    #[test]
    fn test_new_rejects_nan_time() {
        let result = LapTelemetry::new(vec![0.0, 1.0], vec![0.0, f64::NAN]);
        assert!(matches!(result, Err(TelemetryError::NonFinite { index: 1, .. })));
    }

    #[test]
    fn test_repeated_distance_is_accepted() -> TestResult {
        let lap = LapTelemetry::new(vec![0.0, 0.0, 10.0], vec![0.0, 0.5, 1.0])?;
        assert_eq!(lap.len(), 3);
        Ok(())
    }

    #[test]
    fn test_validated_position_requires_both_columns() -> TestResult {
        let mut lap = LapTelemetry::new(vec![0.0, 1.0], vec![0.0, 1.0])?;
        assert_eq!(
            lap.validated_position(),
            Err(TelemetryError::MissingChannel("x".to_string()))
        );
        lap.x = Some(vec![0.0, 1.0]);
        assert_eq!(
            lap.validated_position(),
            Err(TelemetryError::MissingChannel("y".to_string()))
        );
        lap.y = Some(vec![0.0, 0.0]);
        assert!(lap.validated_position().is_ok());
        Ok(())
    }

    #[test]
    fn test_timing_check_ignores_broken_optional_columns() -> TestResult {
        let mut lap = LapTelemetry::new(vec![0.0, 50.0, 100.0], vec![0.0, 1.0, 2.0])?;
        lap.x = Some(vec![0.0, 1.0]);
        lap.channels.insert("brake".to_string(), vec![0.0, f64::NAN, 1.0]);

        assert!(lap.validate_timing().is_ok());
        assert!(matches!(lap.validate(), Err(TelemetryError::LengthMismatch { .. })));
        Ok(())
    }

    #[test]
    fn test_validated_channel_checks_only_that_channel() -> TestResult {
        let mut lap = LapTelemetry::new(vec![0.0, 50.0, 100.0], vec![0.0, 1.0, 2.0])?
            .with_channel("speed", vec![200.0, 210.0, 220.0])?;
        lap.channels.insert("brake".to_string(), vec![0.0, f64::NAN, 1.0]);

        assert_eq!(lap.validated_channel("speed")?.len(), 3);
        assert!(matches!(
            lap.validated_channel("brake"),
            Err(TelemetryError::NonFinite { index: 1, .. })
        ));
        assert_eq!(
            lap.validated_channel("rpm"),
            Err(TelemetryError::MissingChannel("rpm".to_string()))
        );
        Ok(())
    }

    #[test]
    fn test_validated_position_ignores_named_channels() -> TestResult {
        let mut lap = LapTelemetry::new(vec![0.0, 1.0], vec![0.0, 1.0])?
            .with_position(vec![0.0, 1.0], vec![0.0, 0.0])?;
        lap.channels.insert("brake".to_string(), vec![f64::NAN]);
        assert!(lap.validated_position().is_ok());

        lap.y = Some(vec![0.0]);
        assert!(matches!(
            lap.validated_position(),
            Err(TelemetryError::LengthMismatch { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_with_channel_checks_length() -> TestResult {
        let lap = LapTelemetry::new(vec![0.0, 1.0], vec![0.0, 1.0])?;
        let result = lap.with_channel("speed", vec![100.0]);
        assert!(matches!(result, Err(TelemetryError::LengthMismatch { .. })));
        Ok(())
    }

    #[test]
    fn test_deserialized_lap_without_optional_columns() -> Result<(), serde_json::Error> {
        let lap: LapTelemetry =
            serde_json::from_str(r#"{"distance":[0.0,5.0],"time":[0.0,0.1]}"#)?;
        assert!(lap.position().is_none());
        assert!(lap.channels.is_empty());
        assert!(lap.validate().is_ok());
        Ok(())
    }
}
