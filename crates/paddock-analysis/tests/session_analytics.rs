//! Session analytics over JSON-shaped inputs.

use paddock_analysis::{
    DriverSession, LapAnalysisConfig, RoundResult, cumulative_points, lap_time_distribution,
    team_speed_profile,
};
use paddock_errors::Outcome;
use paddock_test_helpers::prelude::*;
use proptest::prelude::*;

const SESSION: &str = r#"[
  {"driver": "LEC", "team": "Ferrari", "laps": [
    {"lap_number": 1, "lap_time": 95.1, "speed": [110.0, 250.0, 318.0], "compound": "SOFT"},
    {"lap_number": 2, "lap_time": 91.8, "speed": [120.0, 260.0, 321.0], "compound": "SOFT"},
    {"lap_number": 3, "lap_time": null},
    {"lap_number": 4, "lap_time": 92.3, "speed": [118.0, 255.0, 320.0], "compound": "MEDIUM"}
  ]},
  {"driver": "HAM", "team": "Ferrari", "laps": [
    {"lap_number": 1, "lap_time": 92.0, "speed": [121.0, 258.0, 322.0]},
    {"lap_number": 2, "lap_time": 92.5}
  ]},
  {"driver": "SAI", "team": "Williams", "laps": []}
]"#;

fn sessions() -> Vec<DriverSession> {
    must(serde_json::from_str(SESSION))
}

#[test]
fn test_distribution_from_json_session() {
    let Outcome::Ok(report) = lap_time_distribution(&sessions(), &LapAnalysisConfig::default())
    else {
        panic!("expected a distribution");
    };
    let distribution = report.distributions;
    let drivers: Vec<&str> = distribution.iter().map(|d| d.driver.as_str()).collect();
    assert_eq!(drivers, ["LEC", "HAM"]);

    let lec = must_some(distribution.first(), "LEC");
    assert_eq!(lec.summary.count, 3);
    assert_close(lec.summary.median, 92.3, 1e-12);
}

#[test]
fn test_distribution_breaks_down_by_compound() {
    let Outcome::Ok(report) = lap_time_distribution(&sessions(), &LapAnalysisConfig::default())
    else {
        panic!("expected a distribution");
    };
    let [lec, ham] = report.distributions.as_slice() else {
        panic!("expected two drivers");
    };

    let compounds: Vec<(&str, usize)> = lec
        .by_compound
        .iter()
        .map(|c| (c.compound.as_str(), c.summary.count))
        .collect();
    assert_eq!(compounds, [("SOFT", 2), ("MEDIUM", 1)]);
    let soft = must_some(lec.by_compound.first(), "SOFT");
    assert_close(soft.summary.median, 93.45, 1e-12);

    assert!(ham.by_compound.is_empty());
}

#[test]
fn test_team_profile_merges_teammates() {
    let Outcome::Ok(profile) = team_speed_profile(&sessions(), &LapAnalysisConfig::default()) else {
        panic!("expected a profile");
    };
    assert_eq!(profile.teams.len(), 1);
    let ferrari = must_some(profile.teams.first(), "Ferrari");
    assert_eq!(ferrari.team, "Ferrari");
    assert_eq!(ferrari.laps + ferrari.outliers, 4);
    assert_close(profile.centroid.top, ferrari.top_speed, 1e-12);
}

#[test]
fn test_points_outcome_json() -> TestResult {
    let rounds: Vec<RoundResult> = serde_json::from_str(
        r#"[
          {"round": 1, "name": "Bahrain", "results": [{"driver": "VER", "points": 26.0}]},
          {"round": 2, "results": []}
        ]"#,
    )?;
    let outcome = cumulative_points(&rounds, &[]);
    insta::assert_snapshot!(
        serde_json::to_string(&outcome)?,
        @r#"{"status":"ok","drivers":[{"driver":"VER","rounds":[{"round":1,"name":"Bahrain","scored":26.0,"total":26.0}]}]}"#
    );
    Ok(())
}

proptest! {
    #[test]
    fn box_summary_is_ordered(samples in prop::collection::vec(60.0f64..140.0, 1..80)) {
        let summary = paddock_analysis::BoxSummary::from_samples(&samples, 1.5)
            .ok_or_else(|| TestCaseError::fail("no summary"))?;
        prop_assert!(summary.min <= summary.lower_whisker);
        prop_assert!(summary.lower_whisker <= summary.upper_whisker);
        prop_assert!(summary.q1 <= summary.median && summary.median <= summary.q3);
        prop_assert!(summary.upper_whisker <= summary.max);
        prop_assert_eq!(summary.count, samples.len());
    }
}
