//! Residual correction that pins a raw delta curve to official timing.
//!
//! The raw delta drifts: telemetry distance and time are sampled and
//! integrated independently per car, so two laps rarely agree with the
//! timing system at the line. The correction computes, at a few anchor
//! distances, how far the raw curve is from the official gap, interpolates
//! that residual linearly between anchors and adds it back.

use paddock_resample::{Interpolator, ResampleError};
use paddock_telemetry::CumulativeSectors;
use serde::{Deserialize, Serialize};

/// Which correction produced a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Correction {
    /// The reference driver's own, all-zero trace.
    Reference,
    /// Pinned to official gaps at S1, S2 and the finish.
    SectorAnchored,
    /// Only the finish gap is pinned, with a linear ramp from the start.
    LinearFallback,
}

/// A point where the corrected curve is forced to a known value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Distance along the common grid, meters.
    pub distance: f64,
    /// Official gap at this distance, when one is defined.
    pub official: Option<f64>,
    /// Amount added to the raw delta at this distance.
    pub residual: f64,
}

/// The official gaps between a driver and the reference.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OfficialGaps {
    pub lap: f64,
    pub sectors: Option<(f64, f64)>,
}

impl OfficialGaps {
    pub(crate) fn new(
        lap_time: f64,
        reference_lap_time: f64,
        sectors: Option<CumulativeSectors>,
        reference_sectors: Option<CumulativeSectors>,
    ) -> Self {
        let sectors = sectors
            .zip(reference_sectors)
            .map(|(own, reference)| (own.s1 - reference.s1, own.s2 - reference.s2));
        Self {
            lap: lap_time - reference_lap_time,
            sectors,
        }
    }
}

/// Anchors for a sector-anchored correction.
///
/// The start is pinned to a zero gap, the sector boundaries to the official
/// sector gaps and the end of the grid to the official lap gap.
pub(crate) fn sector_anchors(
    raw: &Interpolator<'_>,
    boundaries: (f64, f64),
    sector_gaps: (f64, f64),
    lap_gap: f64,
    max_distance: f64,
) -> Vec<Anchor> {
    [
        (0.0, 0.0),
        (boundaries.0, sector_gaps.0),
        (boundaries.1, sector_gaps.1),
        (max_distance, lap_gap),
    ]
    .into_iter()
    .map(|(distance, official)| Anchor {
        distance,
        official: Some(official),
        residual: official - raw.at(distance),
    })
    .collect()
}

/// Anchors for the fallback ramp: no correction at the start, the full lap
/// gap residual at the end of the grid.
pub(crate) fn fallback_anchors(
    raw: &Interpolator<'_>,
    lap_gap: f64,
    max_distance: f64,
) -> Vec<Anchor> {
    vec![
        Anchor {
            distance: 0.0,
            official: None,
            residual: 0.0,
        },
        Anchor {
            distance: max_distance,
            official: Some(lap_gap),
            residual: lap_gap - raw.at(max_distance),
        },
    ]
}

/// Residual curve defined by a set of anchors.
#[derive(Debug, Clone)]
pub(crate) struct Residual {
    distances: Vec<f64>,
    residuals: Vec<f64>,
}

impl Residual {
    pub(crate) fn new(anchors: &[Anchor]) -> Self {
        Self {
            distances: anchors.iter().map(|a| a.distance).collect(),
            residuals: anchors.iter().map(|a| a.residual).collect(),
        }
    }

    /// Residual at every grid distance; zero everywhere when there are no
    /// anchors.
    pub(crate) fn over(&self, grid: &[f64]) -> Result<Vec<f64>, ResampleError> {
        if self.distances.is_empty() {
            return Ok(vec![0.0; grid.len()]);
        }
        Ok(Interpolator::new(&self.distances, &self.residuals)?.resample(grid))
    }

    pub(crate) fn at(&self, distance: f64) -> Result<f64, ResampleError> {
        if self.distances.is_empty() {
            return Ok(0.0);
        }
        Ok(Interpolator::new(&self.distances, &self.residuals)?.at(distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), ResampleError>;

    #[test]
    fn test_sector_anchors_force_official_values() -> TestResult {
        let grid = [0.0, 100.0, 200.0, 300.0, 400.0];
        let raw_values = [0.0, 0.3, 0.2, 0.9, 1.0];
        let raw = Interpolator::new(&grid, &raw_values)?;

        let anchors = sector_anchors(&raw, (100.0, 300.0), (0.5, 1.0), 1.2, 400.0);
        let residual = Residual::new(&anchors);
        for anchor in &anchors {
            let official = anchor.official.unwrap_or(f64::NAN);
            let corrected = raw.at(anchor.distance) + residual.at(anchor.distance)?;
            assert!((corrected - official).abs() < 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_residual_is_linear_between_anchors() -> TestResult {
        let grid = [0.0, 100.0, 200.0];
        let raw_values = [0.0, 0.0, 0.0];
        let raw = Interpolator::new(&grid, &raw_values)?;
        let anchors = fallback_anchors(&raw, 2.0, 200.0);
        let residual = Residual::new(&anchors).over(&grid)?;
        assert_eq!(residual.len(), 3);
        assert!((residual.iter().sum::<f64>() - 3.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_empty_residual_is_zero() -> TestResult {
        let residual = Residual::new(&[]);
        assert_eq!(residual.over(&[0.0, 1.0])?, vec![0.0, 0.0]);
        assert!(residual.at(5.0)?.abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_official_gaps_need_both_sector_sets() {
        let own = paddock_telemetry::SectorTimes::from_cumulative(20.5, 36.0, 51.2).cumulative();
        let reference = paddock_telemetry::SectorTimes::from_cumulative(20.0, 35.0, 50.0).cumulative();

        let gaps = OfficialGaps::new(51.2, 50.0, own, reference);
        let Some((s1, s2)) = gaps.sectors else {
            panic!("sector gaps should be available");
        };
        assert!((s1 - 0.5).abs() < 1e-12);
        assert!((s2 - 1.0).abs() < 1e-12);
        assert!((gaps.lap - 1.2).abs() < 1e-12);

        assert!(OfficialGaps::new(51.2, 50.0, None, reference).sectors.is_none());
    }
}
