//! Property-based tests for the delta engine.

use approx::abs_diff_eq;
use paddock_delta::{Correction, compute_delta};
use paddock_errors::Outcome;
use paddock_test_helpers::fixtures::LapFixture;
use proptest::prelude::*;

/// Cumulative sector times (s1, s2, lap) with positive splits.
fn sector_times() -> impl Strategy<Value = (f64, f64, f64)> {
    (15.0f64..30.0, 10.0f64..25.0, 10.0f64..25.0)
        .prop_map(|(s1, split2, split3)| (s1, s1 + split2, s1 + split2 + split3))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn corrected_delta_matches_official_gaps_at_anchors(
        reference in sector_times(),
        other in sector_times(),
        fractions in (0.2f64..0.45, 0.55f64..0.85),
    ) {
        // Keep the reference strictly faster so the roles are known.
        prop_assume!(reference.2 < other.2);
        let a = LapFixture::new("A", reference.0, reference.1, reference.2).build();
        let b = LapFixture::new("B", other.0, other.1, other.2)
            .boundary_fractions(fractions.0, fractions.1)
            .build();

        let Outcome::Ok(report) = compute_delta(&[a, b]) else {
            return Err(TestCaseError::fail("expected a delta report"));
        };
        prop_assert_eq!(report.reference_driver.as_str(), "A");

        let trace = report.trace("B").ok_or_else(|| TestCaseError::fail("missing trace"))?;
        prop_assert_eq!(trace.correction, Correction::SectorAnchored);
        for anchor in &trace.anchors {
            let official = anchor.official.ok_or_else(|| TestCaseError::fail("no official gap"))?;
            let corrected = report
                .delta_at("B", anchor.distance)
                .ok_or_else(|| TestCaseError::fail("no delta"))?;
            prop_assert!(abs_diff_eq!(corrected, official, epsilon = 1e-9), "{} vs {}", corrected, official);
        }
        let last = trace.final_delta().unwrap_or(f64::NAN);
        prop_assert!(abs_diff_eq!(last, other.2 - reference.2, epsilon = 1e-9));
    }

    #[test]
    fn every_trace_is_finite_and_on_the_grid(
        laps in prop::collection::vec(sector_times(), 2..6),
        drop_sectors in prop::collection::vec(any::<bool>(), 6),
    ) {
        let records: Vec<_> = laps
            .iter()
            .zip(&drop_sectors)
            .enumerate()
            .map(|(i, (&(s1, s2, s3), &drop))| {
                let fixture = LapFixture::new(&format!("D{i}"), s1, s2, s3);
                if drop { fixture.without_sectors() } else { fixture }.build()
            })
            .collect();

        let Outcome::Ok(report) = compute_delta(&records) else {
            return Err(TestCaseError::fail("expected a delta report"));
        };
        prop_assert_eq!(report.traces.len(), records.len());
        for trace in &report.traces {
            prop_assert_eq!(trace.delta.len(), report.distance.len());
            prop_assert!(trace.delta.iter().all(|v| v.is_finite()));
        }
        let reference = report
            .trace(&report.reference_driver)
            .ok_or_else(|| TestCaseError::fail("missing reference trace"))?;
        prop_assert!(reference.delta.iter().all(|v| v.abs() < f64::EPSILON));
    }
}
