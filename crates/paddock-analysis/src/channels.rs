//! Telemetry channel traces against distance, for overlay charts.

use paddock_errors::{AnalysisError, Outcome};
use paddock_resample::{Interpolator, linspace};
use paddock_telemetry::{DriverLapRecord, TelemetryError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One driver's channel values along the lap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelTrace {
    /// Driver abbreviation.
    pub driver: String,
    /// Team name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Distance of each value, meters.
    pub distance: Vec<f64>,
    /// Channel values.
    pub values: Vec<f64>,
}

/// A named channel for every driver that recorded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelComparison {
    /// Channel name, e.g. `speed` or `throttle`.
    pub channel: String,
    /// Traces in input order.
    pub traces: Vec<ChannelTrace>,
}

/// Extracts `channel` from each driver's lap.
///
/// With `grid_points`, every trace is resampled onto one grid spanning the
/// distance range all included laps cover; otherwise traces keep their own
/// sampling.
pub fn channel_comparison(
    records: &[DriverLapRecord],
    channel: &str,
    grid_points: Option<usize>,
) -> Outcome<ChannelComparison> {
    Outcome::from_result(try_compare(records, channel, grid_points))
}

fn try_compare(
    records: &[DriverLapRecord],
    channel: &str,
    grid_points: Option<usize>,
) -> Result<ChannelComparison, AnalysisError> {
    let traces: Vec<ChannelTrace> = records
        .iter()
        .filter_map(|record| {
            let telemetry = &record.telemetry;
            let values = match telemetry.validated_channel(channel) {
                Ok(values) => values,
                Err(TelemetryError::MissingChannel(_)) => {
                    debug!(driver = %record.driver, channel, "Channel not recorded; skipping driver");
                    return None;
                }
                Err(err) => {
                    debug!(driver = %record.driver, reason = %err, "Excluding driver from channel comparison");
                    return None;
                }
            };
            Some(ChannelTrace {
                driver: record.driver.clone(),
                team: record.team.clone(),
                distance: telemetry.distance.clone(),
                values: values.to_vec(),
            })
        })
        .collect();

    if traces.is_empty() {
        return Err(AnalysisError::insufficient(format!(
            "no driver has a '{channel}' channel"
        )));
    }
    let Some(points) = grid_points else {
        return Ok(ChannelComparison {
            channel: channel.to_string(),
            traces,
        });
    };

    if points < 2 {
        return Err(AnalysisError::computation(format!(
            "distance grid needs at least 2 points, requested {points}"
        )));
    }
    let end = traces
        .iter()
        .filter_map(|t| t.distance.last().copied())
        .fold(f64::INFINITY, f64::min);
    if !(end.is_finite() && end > 0.0) {
        return Err(AnalysisError::insufficient("laps share no distance range"));
    }
    let grid = linspace(0.0, end, points);

    let traces = traces
        .into_iter()
        .map(|trace| {
            let values = Interpolator::new(&trace.distance, &trace.values)
                .map(|interp| interp.resample(&grid))
                .map_err(|e| AnalysisError::computation(format!("{}: {e}", trace.driver)))?;
            Ok(ChannelTrace {
                distance: grid.clone(),
                values,
                ..trace
            })
        })
        .collect::<Result<Vec<_>, AnalysisError>>()?;

    Ok(ChannelComparison {
        channel: channel.to_string(),
        traces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddock_test_helpers::fixtures::LapFixture;

    #[test]
    fn test_drivers_without_channel_are_skipped() {
        let mut bare = LapFixture::new("BOT", 20.0, 35.0, 50.0).build();
        bare.telemetry.channels.clear();
        let full = LapFixture::new("ZHO", 20.5, 36.0, 51.0).build();

        let Outcome::Ok(comparison) = channel_comparison(&[bare, full], "throttle", None) else {
            panic!("expected a comparison");
        };
        assert_eq!(comparison.traces.len(), 1);
        assert_eq!(comparison.traces.first().map(|t| t.driver.as_str()), Some("ZHO"));
    }

    #[test]
    fn test_broken_other_channel_does_not_exclude_driver() {
        let mut lap = LapFixture::new("BOT", 20.0, 35.0, 50.0).build();
        lap.telemetry.channels.insert("brake".to_string(), vec![f64::NAN; 3]);
        lap.telemetry.x = Some(vec![0.0; 2]);

        let Outcome::Ok(comparison) = channel_comparison(&[lap.clone()], "speed", None) else {
            panic!("expected a comparison");
        };
        assert_eq!(comparison.traces.len(), 1);
        assert!(channel_comparison(&[lap], "brake", None).is_insufficient_data());
    }

    #[test]
    fn test_unknown_channel_is_insufficient() {
        let lap = LapFixture::new("BOT", 20.0, 35.0, 50.0).build();
        assert!(channel_comparison(&[lap], "drs", None).is_insufficient_data());
    }

    #[test]
    fn test_resampled_traces_share_the_grid() {
        let long = LapFixture::new("ALO", 20.0, 35.0, 50.0).build();
        let short = LapFixture::new("STR", 20.0, 35.0, 50.0)
            .lap_length(4_800.0)
            .samples(97)
            .build();

        let Outcome::Ok(comparison) = channel_comparison(&[long, short], "speed", Some(100)) else {
            panic!("expected a comparison");
        };
        for trace in &comparison.traces {
            assert_eq!(trace.distance.len(), 100);
            assert_eq!(trace.values.len(), 100);
            assert_eq!(trace.distance.last().copied(), Some(4_800.0));
        }
    }
}
