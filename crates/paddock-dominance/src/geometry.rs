//! Reference path geometry: points, slicing at boundaries, boundary normals.

use serde::{Deserialize, Serialize};

/// A point (or direction) in the telemetry's X/Y plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackPoint {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl TrackPoint {
    /// Creates a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length when read as a vector.
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Zips X/Y columns into points.
pub fn path_from_columns(x: &[f64], y: &[f64]) -> Vec<TrackPoint> {
    x.iter().zip(y).map(|(&x, &y)| TrackPoint::new(x, y)).collect()
}

/// Points of `path` from `start` to `end`, both inclusive.
///
/// Indices are clamped to the path, so consecutive slices cut at the same
/// index share that point.
pub fn slice_inclusive(path: &[TrackPoint], start: usize, end: usize) -> Vec<TrackPoint> {
    let Some(last) = path.len().checked_sub(1) else {
        return Vec::new();
    };
    let end = end.min(last);
    let start = start.min(end);
    path.get(start..=end).map(<[TrackPoint]>::to_vec).unwrap_or_default()
}

/// Unit normal to the path at `index`.
///
/// The tangent is the central difference of the neighbouring points (one
/// sided at either end), rotated 90 degrees counter-clockwise. `None` when
/// the tangent has no usable length, e.g. on a stationary stretch.
pub fn unit_normal(path: &[TrackPoint], index: usize) -> Option<TrackPoint> {
    let last = path.len().checked_sub(1)?;
    let index = index.min(last);
    let before = path.get(index.saturating_sub(1))?;
    let after = path.get((index + 1).min(last))?;

    let tangent = TrackPoint::new(after.x - before.x, after.y - before.y);
    let length = tangent.norm();
    if !length.is_finite() || length <= f64::EPSILON {
        return None;
    }
    Some(TrackPoint::new(-tangent.y / length, tangent.x / length))
}
