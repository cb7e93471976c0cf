//! Evenly spaced grids and searches over monotonic columns.

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// The last value is exactly `end`, so a grid built to a lap's maximum
/// distance ends on that distance without rounding drift.
///
/// ```
/// use paddock_resample::linspace;
///
/// let grid = linspace(0.0, 100.0, 5);
/// assert_eq!(grid.len(), 5);
/// assert!((grid[1] - 25.0).abs() < 1e-12);
/// assert_eq!(grid.last().copied(), Some(100.0));
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = n - 1;
            let step = (end - start) / last as f64;
            (0..n)
                .map(|i| if i == last { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Index of the first value at or above `threshold` in a non-decreasing
/// column, or `None` if every value is below it.
///
/// ```
/// use paddock_resample::first_index_at_or_above;
///
/// let time = [0.0, 9.8, 20.0, 20.0, 31.2];
/// assert_eq!(first_index_at_or_above(&time, 20.0), Some(2));
/// assert_eq!(first_index_at_or_above(&time, 40.0), None);
/// ```
pub fn first_index_at_or_above(values: &[f64], threshold: f64) -> Option<usize> {
    let index = values.partition_point(|&v| v < threshold);
    (index < values.len()).then_some(index)
}

/// `true` when no value is lower than its predecessor.
pub fn is_non_decreasing(values: &[f64]) -> bool {
    first_decrease(values).is_none()
}

/// `true` when every value is higher than its predecessor.
pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|pair| matches!(pair, [a, b] if b > a))
}

pub(crate) fn first_decrease(values: &[f64]) -> Option<usize> {
    values
        .windows(2)
        .position(|pair| matches!(pair, [a, b] if b < a))
        .map(|i| i.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_edge_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 2), vec![0.0, 1.0]);
    }

    #[test]
    fn test_linspace_spacing_is_even() {
        let grid = linspace(0.0, 5303.7, 500);
        let step = 5303.7 / 499.0;
        for pair in grid.windows(2) {
            if let [a, b] = pair {
                assert!(((b - a) - step).abs() < 1e-9);
            }
        }
        assert!(is_strictly_increasing(&grid));
    }

    #[test]
    fn test_first_index_on_empty_column() {
        assert_eq!(first_index_at_or_above(&[], 0.0), None);
    }

    #[test]
    fn test_first_index_at_start() {
        assert_eq!(first_index_at_or_above(&[1.0, 2.0], 0.5), Some(0));
    }

    #[test]
    fn test_monotonic_checks() {
        assert!(is_non_decreasing(&[0.0, 0.0, 1.0]));
        assert!(!is_strictly_increasing(&[0.0, 0.0, 1.0]));
        assert!(!is_non_decreasing(&[0.0, 2.0, 1.0]));
        assert_eq!(first_decrease(&[0.0, 2.0, 1.0]), Some(2));
    }
}
