//! Property-based tests for the dominance engine.

use paddock_dominance::{DominanceConfig, DominanceEngine};
use paddock_errors::Outcome;
use paddock_test_helpers::fixtures::LapFixture;
use proptest::prelude::*;

fn lap() -> impl Strategy<Value = (f64, f64, f64)> {
    (15.0f64..30.0, 10.0f64..25.0, 10.0f64..25.0)
        .prop_map(|(s1, split2, split3)| (s1, s1 + split2, s1 + split2 + split3))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn segments_always_cover_the_lap(
        laps in prop::collection::vec(lap(), 2..6),
        mini_sectors in 1usize..40,
        samples in 50usize..400,
    ) {
        let records: Vec<_> = laps
            .iter()
            .enumerate()
            .map(|(i, &(s1, s2, s3))| {
                LapFixture::new(&format!("D{i}"), s1, s2, s3).samples(samples).build()
            })
            .collect();

        let engine = DominanceEngine::new(DominanceConfig { mini_sectors });
        let Outcome::Ok(report) = engine.compute(&records) else {
            return Err(TestCaseError::fail("expected a dominance report"));
        };

        prop_assert_eq!(report.segments.len(), mini_sectors);
        let total: usize = report.wins.iter().map(|w| w.wins).sum();
        prop_assert_eq!(total, mini_sectors);
        prop_assert_eq!(report.wins.len(), records.len());
        prop_assert!(report.wins.windows(2).all(|w| match w {
            [a, b] => a.wins >= b.wins,
            _ => true,
        }), "wins must be sorted in descending order");

        let mut expected_start = 0.0;
        for segment in &report.segments {
            prop_assert!((segment.start_distance - expected_start).abs() < 1e-9);
            prop_assert!(segment.end_distance > segment.start_distance);
            prop_assert!(!segment.coordinates.is_empty());
            prop_assert!(segment.sector_time > 0.0);
            expected_start = segment.end_distance;
        }
        prop_assert!((expected_start - 5_000.0).abs() < 1e-9);
    }
}
