//! Piecewise-linear interpolation over a borrowed sample table.

use crate::ResampleError;
use crate::grid::first_decrease;

/// Linear interpolation of `fp` as a function of `xp`.
///
/// Boundary behavior follows the usual numerical convention:
/// - below the first x the first y is returned, at or above the last x the
///   last y is returned (no extrapolation);
/// - where several samples share an x, the last of them wins;
/// - x values must be non-decreasing.
///
/// Each lookup is a binary search, O(log n). The table is borrowed, so an
/// interpolator cannot outlive the telemetry it reads from.
///
/// # Example
///
/// ```
/// use paddock_resample::Interpolator;
///
/// let distance = [0.0, 100.0, 200.0];
/// let time = [0.0, 2.0, 3.0];
/// let time_at = Interpolator::new(&distance, &time)?;
///
/// assert!((time_at.at(50.0) - 1.0).abs() < 1e-12);
/// assert!((time_at.at(150.0) - 2.5).abs() < 1e-12);
/// assert!((time_at.at(-10.0) - 0.0).abs() < 1e-12);
/// assert!((time_at.at(500.0) - 3.0).abs() < 1e-12);
/// # Ok::<(), paddock_resample::ResampleError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Interpolator<'a> {
    xp: &'a [f64],
    fp: &'a [f64],
    first: f64,
}

impl<'a> Interpolator<'a> {
    /// Builds an interpolator after checking the table.
    ///
    /// # Errors
    ///
    /// Returns a [`ResampleError`] when the table is empty, the columns differ
    /// in length, a value is non-finite or `xp` decreases.
    pub fn new(xp: &'a [f64], fp: &'a [f64]) -> Result<Self, ResampleError> {
        if xp.len() != fp.len() {
            return Err(ResampleError::LengthMismatch {
                xp: xp.len(),
                fp: fp.len(),
            });
        }
        let Some(&first) = fp.first() else {
            return Err(ResampleError::Empty);
        };
        if let Some(index) = xp
            .iter()
            .zip(fp)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(ResampleError::NonFinite { index });
        }
        if let Some(index) = first_decrease(xp) {
            return Err(ResampleError::NotMonotonic { index });
        }
        Ok(Self { xp, fp, first })
    }

    /// Number of samples in the table.
    pub fn len(&self) -> usize {
        self.xp.len()
    }

    /// Always `false`; construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.xp.is_empty()
    }

    /// Interpolated value at `x`.
    #[inline]
    pub fn at(&self, x: f64) -> f64 {
        // First sample strictly to the right of x.
        let upper = self.xp.partition_point(|&v| v <= x);
        let Some(lower) = upper.checked_sub(1) else {
            return self.first;
        };

        let left = self.xp.get(lower).zip(self.fp.get(lower));
        let right = self.xp.get(upper).zip(self.fp.get(upper));
        match (left, right) {
            (Some((&x0, &y0)), Some((&x1, &y1))) => {
                // x0 <= x < x1, so the span is never zero.
                let fraction = (x - x0) / (x1 - x0);
                y0 + fraction * (y1 - y0)
            }
            (Some((_, &y0)), None) => y0,
            _ => self.first,
        }
    }

    /// Interpolated values at every point of `xs`.
    pub fn resample(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.at(x)).collect()
    }
}
