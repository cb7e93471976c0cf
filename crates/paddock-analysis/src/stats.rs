//! Order statistics for lap-time and speed samples.

use serde::{Deserialize, Serialize};

/// Percentile `q` (0..=100) of an ascending slice, interpolating linearly
/// between the two closest ranks.
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = (q.clamp(0.0, 100.0) / 100.0) * last as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let low = *sorted.get(lower)?;
    let high = *sorted.get(upper)?;
    Some(low + (high - low) * (rank - lower as f64))
}

/// Finite values of `samples`, ascending.
pub fn sorted_finite(samples: &[f64]) -> Vec<f64> {
    let mut values: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    values.sort_by(f64::total_cmp);
    values
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Tukey fences `[q1 - k * iqr, q3 + k * iqr]` of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fences {
    /// Lower fence.
    pub lower: f64,
    /// Upper fence.
    pub upper: f64,
}

impl Fences {
    /// Fences of `samples` at `factor` interquartile ranges.
    pub fn of(samples: &[f64], factor: f64) -> Option<Self> {
        let sorted = sorted_finite(samples);
        let q1 = percentile(&sorted, 25.0)?;
        let q3 = percentile(&sorted, 75.0)?;
        let iqr = q3 - q1;
        Some(Self {
            lower: q1 - factor * iqr,
            upper: q3 + factor * iqr,
        })
    }

    /// Whether `value` lies within the fences, inclusive.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Five-number summary with mean, whiskers and outliers, as drawn by a box
/// plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    /// Number of samples summarized.
    pub count: usize,
    /// Smallest sample.
    pub min: f64,
    /// 25th percentile.
    pub q1: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q3: f64,
    /// Largest sample.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Smallest sample at or above the lower fence.
    pub lower_whisker: f64,
    /// Largest sample at or below the upper fence.
    pub upper_whisker: f64,
    /// Samples beyond the fences, ascending.
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Summarizes the finite values of `samples`; `None` if there are none.
    pub fn from_samples(samples: &[f64], iqr_factor: f64) -> Option<Self> {
        let sorted = sorted_finite(samples);
        let min = *sorted.first()?;
        let max = *sorted.last()?;
        let q1 = percentile(&sorted, 25.0)?;
        let median = percentile(&sorted, 50.0)?;
        let q3 = percentile(&sorted, 75.0)?;
        let fences = Fences {
            lower: q1 - iqr_factor * (q3 - q1),
            upper: q3 + iqr_factor * (q3 - q1),
        };

        let inside = || sorted.iter().copied().filter(|v| fences.contains(*v));
        let lower_whisker = inside().next().unwrap_or(q1);
        let upper_whisker = inside().last().unwrap_or(q3);
        let outliers = sorted.iter().copied().filter(|v| !fences.contains(*v)).collect();

        Some(Self {
            count: sorted.len(),
            min,
            q1,
            median,
            q3,
            max,
            mean: mean(&sorted)?,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}
