//! Mini-sector winners and the geometry to draw them.

use paddock_errors::{AnalysisError, Outcome};
use paddock_resample::{Interpolator, first_index_at_or_above, linspace};
use paddock_telemetry::DriverLapRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::DominanceConfig;
use crate::geometry::{TrackPoint, path_from_columns, slice_inclusive, unit_normal};

/// Minimum number of qualifying drivers for a dominance map.
pub const MIN_DRIVERS: usize = 2;

/// One equal-distance slice of the lap and the driver fastest through it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniSector {
    /// Zero-based position along the lap.
    pub index: usize,
    /// Start distance on the reference lap, meters.
    pub start_distance: f64,
    /// End distance on the reference lap, meters.
    pub end_distance: f64,
    /// Driver with the smallest time through this mini-sector.
    pub winner: String,
    /// The winner's time through this mini-sector, seconds.
    pub sector_time: f64,
    /// Gap from the winner to the next fastest driver, seconds.
    pub margin: f64,
    /// Reference path points, sharing end points with the neighbours.
    pub coordinates: Vec<TrackPoint>,
}

/// A mini-sector boundary, for drawing a tick across the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryMarker {
    /// Boundary distance, meters.
    pub distance: f64,
    /// Reference path point at the boundary.
    pub point: TrackPoint,
    /// Unit normal to the path there, when the tangent is defined.
    pub normal: Option<TrackPoint>,
}

/// Mini-sectors won by one driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverWins {
    /// Driver abbreviation.
    pub driver: String,
    /// Team name, passed through for labeling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Number of mini-sectors won.
    pub wins: usize,
}

/// Successful result of a dominance computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominanceReport {
    /// Driver whose lap supplies the distance scale and the path.
    pub reference_driver: String,
    /// The reference lap's X/Y path.
    pub reference_path: Vec<TrackPoint>,
    /// Mini-sectors in lap order.
    pub segments: Vec<MiniSector>,
    /// One marker per mini-sector boundary, start and finish included.
    pub markers: Vec<BoundaryMarker>,
    /// Wins per driver, most first; equal counts keep input order.
    pub wins: Vec<DriverWins>,
}

impl DominanceReport {
    /// Number of mini-sectors won by `driver`, if that driver was included.
    pub fn wins_for(&self, driver: &str) -> Option<usize> {
        self.wins.iter().find(|w| w.driver == driver).map(|w| w.wins)
    }
}

/// Splits the lap into equal-distance mini-sectors and attributes each to
/// the driver who was fastest through it.
#[derive(Debug, Clone, Default)]
pub struct DominanceEngine {
    config: DominanceConfig,
}

struct Qualified<'a> {
    record: &'a DriverLapRecord,
    x: &'a [f64],
    y: &'a [f64],
}

impl DominanceEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: DominanceConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &DominanceConfig {
        &self.config
    }

    /// Computes the dominance map for `records`.
    pub fn compute(&self, records: &[DriverLapRecord]) -> Outcome<DominanceReport> {
        Outcome::from_result(self.try_compute(records))
    }

    fn try_compute(&self, records: &[DriverLapRecord]) -> Result<DominanceReport, AnalysisError> {
        let qualified = qualify(records);
        if qualified.len() < MIN_DRIVERS {
            return Err(AnalysisError::too_few_drivers(MIN_DRIVERS, qualified.len()));
        }
        let Some(reference) = qualified.first() else {
            return Err(AnalysisError::too_few_drivers(MIN_DRIVERS, 0));
        };

        let reference_distance = &reference.record.telemetry.distance;
        let max_distance = reference.record.telemetry.max_distance().unwrap_or_default();
        if max_distance <= 0.0 {
            return Err(AnalysisError::insufficient(format!(
                "reference lap of {} covers no distance",
                reference.record.driver
            )));
        }
        if self.config.mini_sectors < 1 {
            return Err(AnalysisError::computation(
                "at least one mini-sector is required",
            ));
        }
        let boundary_count = self.config.mini_sectors.checked_add(1).ok_or_else(|| {
            AnalysisError::computation(format!(
                "{} mini-sectors overflow the boundary count",
                self.config.mini_sectors
            ))
        })?;
        let boundaries = linspace(0.0, max_distance, boundary_count);

        let crossing_times = qualified
            .iter()
            .map(|q| {
                let telemetry = &q.record.telemetry;
                Interpolator::new(&telemetry.distance, &telemetry.time)
                    .map(|interp| interp.resample(&boundaries))
                    .map_err(|e| AnalysisError::computation(format!("{}: {e}", q.record.driver)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let sector_times: Vec<Vec<f64>> = crossing_times
            .iter()
            .map(|times| times.windows(2).map(window_span).collect())
            .collect();

        let path = path_from_columns(reference.x, reference.y);
        let boundary_indices: Vec<usize> = boundaries
            .iter()
            .map(|&b| {
                first_index_at_or_above(reference_distance, b)
                    .unwrap_or_else(|| reference_distance.len().saturating_sub(1))
            })
            .collect();

        let mut segments = Vec::with_capacity(self.config.mini_sectors);
        let mut wins = vec![0usize; qualified.len()];
        for (index, (span, cut)) in boundaries.windows(2).zip(boundary_indices.windows(2)).enumerate() {
            let (&[start_distance, end_distance], &[start_index, end_index]) = (span, cut) else {
                continue;
            };
            let (winner, sector_time, margin) = fastest(&sector_times, index).ok_or_else(|| {
                AnalysisError::computation(format!("no finite time through mini-sector {index}"))
            })?;
            if let Some(count) = wins.get_mut(winner) {
                *count += 1;
            }
            let winner = qualified
                .get(winner)
                .map(|q| q.record.driver.clone())
                .unwrap_or_default();
            segments.push(MiniSector {
                index,
                start_distance,
                end_distance,
                winner,
                sector_time,
                margin,
                coordinates: slice_inclusive(&path, start_index, end_index),
            });
        }

        let markers = boundaries
            .iter()
            .zip(&boundary_indices)
            .filter_map(|(&distance, &index)| {
                path.get(index).map(|&point| BoundaryMarker {
                    distance,
                    point,
                    normal: unit_normal(&path, index),
                })
            })
            .collect();

        let mut wins: Vec<DriverWins> = qualified
            .iter()
            .zip(wins)
            .map(|(q, wins)| DriverWins {
                driver: q.record.driver.clone(),
                team: q.record.team.clone(),
                wins,
            })
            .collect();
        wins.sort_by(|a, b| b.wins.cmp(&a.wins));

        debug!(
            reference = %reference.record.driver,
            drivers = qualified.len(),
            segments = segments.len(),
            "Computed track dominance"
        );

        Ok(DominanceReport {
            reference_driver: reference.record.driver.clone(),
            reference_path: path,
            segments,
            markers,
            wins,
        })
    }
}

/// Computes the dominance map with the default configuration.
pub fn compute_track_dominance(records: &[DriverLapRecord]) -> Outcome<DominanceReport> {
    DominanceEngine::default().compute(records)
}

fn qualify(records: &[DriverLapRecord]) -> Vec<Qualified<'_>> {
    records
        .iter()
        .filter_map(|record| {
            let checked = record
                .valid_lap_time()
                .and_then(|_| record.telemetry.validated_position());
            match checked {
                Ok((x, y)) => Some(Qualified { record, x, y }),
                Err(err) => {
                    debug!(driver = %record.driver, reason = %err, "Excluding driver from dominance");
                    None
                }
            }
        })
        .collect()
}

fn window_span(window: &[f64]) -> f64 {
    match window {
        [start, end] => end - start,
        _ => f64::NAN,
    }
}

/// Index, time and margin of the fastest driver through mini-sector
/// `sector`; the first of equal times wins.
fn fastest(sector_times: &[Vec<f64>], sector: usize) -> Option<(usize, f64, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut runner_up = f64::INFINITY;
    for (driver, times) in sector_times.iter().enumerate() {
        let time = *times.get(sector)?;
        if !time.is_finite() {
            return None;
        }
        match best {
            Some((_, best_time)) if time >= best_time => runner_up = runner_up.min(time),
            Some((_, best_time)) => {
                runner_up = runner_up.min(best_time);
                best = Some((driver, time));
            }
            None => best = Some((driver, time)),
        }
    }
    best.map(|(driver, time)| (driver, time, runner_up - time))
}
