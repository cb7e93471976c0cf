//! Property-based tests for interpolation and grid construction.

use approx::abs_diff_eq;
use paddock_resample::{Interpolator, first_index_at_or_above, is_strictly_increasing, linspace};
use proptest::prelude::*;

fn monotonic_table() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec((0.0f64..25.0, -5.0f64..5.0), 1..120).prop_map(|steps| {
        let mut x = 0.0;
        let mut xp = Vec::with_capacity(steps.len());
        let mut fp = Vec::with_capacity(steps.len());
        for (dx, y) in steps {
            x += dx;
            xp.push(x);
            fp.push(y);
        }
        (xp, fp)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(400))]

    #[test]
    fn interpolation_stays_within_table_range((xp, fp) in monotonic_table(), query in -50.0f64..3500.0) {
        let interp = Interpolator::new(&xp, &fp).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let lo = fp.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = fp.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let value = interp.at(query);
        prop_assert!(value.is_finite());
        prop_assert!(value >= lo - 1e-9 && value <= hi + 1e-9, "{} outside [{}, {}]", value, lo, hi);
    }

    #[test]
    fn interpolation_of_a_line_is_exact(slope in -3.0f64..3.0, offset in -10.0f64..10.0, query in 0.0f64..1000.0) {
        let xp = linspace(0.0, 1000.0, 37);
        let fp: Vec<f64> = xp.iter().map(|x| slope * x + offset).collect();
        let interp = Interpolator::new(&xp, &fp).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert!(abs_diff_eq!(interp.at(query), slope * query + offset, epsilon = 1e-7));
    }

    #[test]
    fn monotonic_input_gives_monotonic_output((xp, _) in monotonic_table(), a in 0.0f64..3000.0, b in 0.0f64..3000.0) {
        // time as a function of distance: use xp itself as a non-decreasing y
        let interp = Interpolator::new(&xp, &xp).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(interp.at(lo) <= interp.at(hi) + 1e-9);
    }

    #[test]
    fn linspace_is_strictly_increasing_and_spans(end in 1.0f64..10_000.0, n in 2usize..1000) {
        let grid = linspace(0.0, end, n);
        prop_assert_eq!(grid.len(), n);
        prop_assert!(is_strictly_increasing(&grid));
        prop_assert_eq!(grid.first().copied(), Some(0.0));
        prop_assert_eq!(grid.last().copied(), Some(end));
    }

    #[test]
    fn first_index_is_the_partition_point((xp, _) in monotonic_table(), threshold in 0.0f64..3000.0) {
        match first_index_at_or_above(&xp, threshold) {
            Some(i) => {
                prop_assert!(xp[i] >= threshold);
                if i > 0 {
                    prop_assert!(xp[i - 1] < threshold);
                }
            }
            None => prop_assert!(xp.iter().all(|&v| v < threshold)),
        }
    }
}
