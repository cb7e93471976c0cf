//! The delta engine: reference selection, common grid, raw and corrected deltas.

use paddock_errors::{AnalysisError, Outcome};
use paddock_resample::{Interpolator, linspace};
use paddock_telemetry::DriverLapRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::correction::{Anchor, Correction, OfficialGaps, Residual, fallback_anchors, sector_anchors};
use crate::{DeltaConfig, SectorBoundaries};

/// Minimum number of qualifying drivers for a comparison.
pub const MIN_DRIVERS: usize = 2;

/// One driver's delta to the reference along the common grid.
///
/// Positive values mean the driver is behind the reference at that distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaTrace {
    /// Driver abbreviation.
    pub driver: String,
    /// Team name, passed through for labeling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Official lap time.
    pub lap_time: f64,
    /// Correction applied to this trace.
    pub correction: Correction,
    /// Corrected delta at each grid point, seconds.
    pub delta: Vec<f64>,
    /// Uncorrected delta at each grid point, seconds.
    pub raw_delta: Vec<f64>,
    /// Anchors the correction was built from.
    pub anchors: Vec<Anchor>,
}

impl DeltaTrace {
    /// Delta at the last grid point.
    pub fn final_delta(&self) -> Option<f64> {
        self.delta.last().copied()
    }
}

/// Successful result of a delta computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaReport {
    /// Driver with the fastest lap; all deltas are relative to this driver.
    pub reference_driver: String,
    /// Common distance grid, meters.
    pub distance: Vec<f64>,
    /// One trace per included driver in input order, the reference included
    /// as an all-zero trace.
    pub traces: Vec<DeltaTrace>,
    /// Sector boundary distances on the reference lap, for annotation.
    pub sector_boundaries: SectorBoundaries,
}

impl DeltaReport {
    /// Trace for `driver`, if that driver was included.
    pub fn trace(&self, driver: &str) -> Option<&DeltaTrace> {
        self.traces.iter().find(|trace| trace.driver == driver)
    }

    /// Corrected delta of `driver` at an arbitrary distance on the grid.
    ///
    /// Evaluates the raw curve and the residual separately, so the result
    /// equals the official gap exactly at every anchor distance even when
    /// the anchor falls between grid points.
    pub fn delta_at(&self, driver: &str, distance: f64) -> Option<f64> {
        let trace = self.trace(driver)?;
        let raw = Interpolator::new(&self.distance, &trace.raw_delta).ok()?;
        let residual = Residual::new(&trace.anchors).at(distance).ok()?;
        Some(raw.at(distance) + residual)
    }
}

/// Aligns fastest laps on a common distance grid and computes
/// sector-corrected time deltas to the fastest driver.
///
/// ```
/// use paddock_delta::DeltaEngine;
/// use paddock_telemetry::{DriverLapRecord, LapTelemetry, SectorTimes};
///
/// let lap = |driver: &str, lap_time: f64| -> Result<DriverLapRecord, Box<dyn std::error::Error>> {
///     let telemetry = LapTelemetry::new(vec![0.0, 2_500.0, 5_000.0], vec![0.0, lap_time / 2.0, lap_time])?;
///     Ok(DriverLapRecord::new(driver, lap_time, SectorTimes::missing(), telemetry))
/// };
///
/// let outcome = DeltaEngine::default().compute(&[lap("NOR", 90.4)?, lap("PIA", 90.1)?]);
/// let report = outcome.ok().ok_or("expected a delta report")?;
/// assert_eq!(report.reference_driver, "PIA");
/// let gap = report.trace("NOR").and_then(|t| t.final_delta()).ok_or("missing trace")?;
/// assert!((gap - 0.3).abs() < 1e-9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeltaEngine {
    config: DeltaConfig,
}

struct Qualified<'a> {
    record: &'a DriverLapRecord,
    lap_time: f64,
}

impl DeltaEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: DeltaConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &DeltaConfig {
        &self.config
    }

    /// Computes delta traces for `records`.
    ///
    /// Never panics and never returns an error type: insufficient input and
    /// computation failures are [`Outcome`] variants.
    pub fn compute(&self, records: &[DriverLapRecord]) -> Outcome<DeltaReport> {
        Outcome::from_result(self.try_compute(records))
    }

    fn try_compute(&self, records: &[DriverLapRecord]) -> Result<DeltaReport, AnalysisError> {
        let qualified = qualify(records);
        if qualified.len() < MIN_DRIVERS {
            return Err(AnalysisError::too_few_drivers(MIN_DRIVERS, qualified.len()));
        }

        let reference = select_reference(&qualified)
            .ok_or_else(|| AnalysisError::too_few_drivers(MIN_DRIVERS, 0))?;
        debug!(
            reference = %reference.record.driver,
            lap_time = reference.lap_time,
            drivers = qualified.len(),
            "Selected delta reference"
        );

        let max_distance = qualified
            .iter()
            .filter_map(|q| q.record.telemetry.max_distance())
            .fold(f64::INFINITY, f64::min);
        if !(max_distance.is_finite() && max_distance > self.config.min_common_distance) {
            return Err(AnalysisError::insufficient(format!(
                "common distance range {max_distance:.3} m is too short for a delta curve"
            )));
        }
        if self.config.grid_points < 2 {
            return Err(AnalysisError::computation(format!(
                "distance grid needs at least 2 points, configured {}",
                self.config.grid_points
            )));
        }
        let grid = linspace(0.0, max_distance, self.config.grid_points);

        let reference_times = times_on_grid(reference.record, &grid)?;
        let reference_sectors = reference.record.sectors.cumulative();
        let sector_boundaries =
            SectorBoundaries::locate(&reference.record.telemetry, reference_sectors);
        let anchor_distances = sector_boundaries.anchor_distances(max_distance);
        if reference_sectors.is_some() && anchor_distances.is_none() {
            warn!(
                reference = %reference.record.driver,
                s1 = ?sector_boundaries.s1,
                s2 = ?sector_boundaries.s2,
                max_distance,
                "Reference sector boundaries unusable; falling back to linear correction"
            );
        }

        let traces = qualified
            .iter()
            .map(|q| {
                if std::ptr::eq(q.record, reference.record) {
                    return Ok(reference_trace(q, grid.len()));
                }
                let gaps = OfficialGaps::new(
                    q.lap_time,
                    reference.lap_time,
                    q.record.sectors.cumulative(),
                    reference_sectors,
                );
                driver_trace(q, &grid, &reference_times, gaps, anchor_distances, max_distance)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DeltaReport {
            reference_driver: reference.record.driver.clone(),
            distance: grid,
            traces,
            sector_boundaries,
        })
    }
}

/// Computes delta traces with the default configuration.
pub fn compute_delta(records: &[DriverLapRecord]) -> Outcome<DeltaReport> {
    DeltaEngine::default().compute(records)
}

fn qualify(records: &[DriverLapRecord]) -> Vec<Qualified<'_>> {
    records
        .iter()
        .filter_map(|record| match record.qualify() {
            Ok(lap_time) => Some(Qualified { record, lap_time }),
            Err(err) => {
                debug!(driver = %record.driver, reason = %err, "Excluding driver from delta");
                None
            }
        })
        .collect()
}

/// Fastest lap; the first of equal lap times wins.
fn select_reference<'q, 'a>(qualified: &'q [Qualified<'a>]) -> Option<&'q Qualified<'a>> {
    qualified.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.lap_time >= current.lap_time => Some(current),
        _ => Some(candidate),
    })
}

fn times_on_grid(record: &DriverLapRecord, grid: &[f64]) -> Result<Vec<f64>, AnalysisError> {
    let telemetry = &record.telemetry;
    let interp = Interpolator::new(&telemetry.distance, &telemetry.time)
        .map_err(|e| AnalysisError::computation(format!("{}: {e}", record.driver)))?;
    Ok(interp.resample(grid))
}

fn reference_trace(q: &Qualified<'_>, len: usize) -> DeltaTrace {
    DeltaTrace {
        driver: q.record.driver.clone(),
        team: q.record.team.clone(),
        lap_time: q.lap_time,
        correction: Correction::Reference,
        delta: vec![0.0; len],
        raw_delta: vec![0.0; len],
        anchors: Vec::new(),
    }
}

fn driver_trace(
    q: &Qualified<'_>,
    grid: &[f64],
    reference_times: &[f64],
    gaps: OfficialGaps,
    anchor_distances: Option<(f64, f64)>,
    max_distance: f64,
) -> Result<DeltaTrace, AnalysisError> {
    let driver = &q.record.driver;
    let computation = |e: paddock_resample::ResampleError| {
        AnalysisError::computation(format!("{driver}: {e}"))
    };

    let raw_delta: Vec<f64> = times_on_grid(q.record, grid)?
        .iter()
        .zip(reference_times)
        .map(|(own, reference)| own - reference)
        .collect();
    let raw = Interpolator::new(grid, &raw_delta).map_err(computation)?;

    let (correction, anchors) = match (anchor_distances, gaps.sectors) {
        (Some(boundaries), Some(sector_gaps)) => (
            Correction::SectorAnchored,
            sector_anchors(&raw, boundaries, sector_gaps, gaps.lap, max_distance),
        ),
        _ => {
            debug!(driver = %driver, "Sector times incomplete; using linear fallback correction");
            (
                Correction::LinearFallback,
                fallback_anchors(&raw, gaps.lap, max_distance),
            )
        }
    };

    let residual = Residual::new(&anchors).over(grid).map_err(computation)?;
    let delta: Vec<f64> = raw_delta.iter().zip(&residual).map(|(r, c)| r + c).collect();
    if let Some(index) = delta.iter().position(|v| !v.is_finite()) {
        return Err(AnalysisError::computation(format!(
            "non-finite delta for driver {driver} at grid point {index}"
        )));
    }

    Ok(DeltaTrace {
        driver: driver.clone(),
        team: q.record.team.clone(),
        lap_time: q.lap_time,
        correction,
        delta,
        raw_delta,
        anchors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddock_telemetry::{LapTelemetry, SectorTimes};

    fn record(driver: &str, lap_time: f64) -> DriverLapRecord {
        DriverLapRecord::new(
            driver,
            lap_time,
            SectorTimes::missing(),
            LapTelemetry {
                distance: vec![0.0, 1_000.0],
                time: vec![0.0, lap_time],
                ..LapTelemetry::default()
            },
        )
    }

    #[test]
    fn test_reference_tie_goes_to_first() {
        let records = [record("ALB", 80.0), record("SAI", 79.5), record("COL", 79.5)];
        let qualified = qualify(&records);
        let reference = select_reference(&qualified).map(|q| q.record.driver.as_str());
        assert_eq!(reference, Some("SAI"));
    }

    #[test]
    fn test_single_point_grid_is_a_computation_error() {
        let config = DeltaConfig {
            grid_points: 1,
            ..DeltaConfig::default()
        };
        let outcome = DeltaEngine::new(config).compute(&[record("A", 80.0), record("B", 81.0)]);
        assert!(outcome.is_error());
    }
}
