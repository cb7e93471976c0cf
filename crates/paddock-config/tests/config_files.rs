//! Loading configuration files from disk.

use std::io::Write;

use paddock_config::{AnalysisConfig, ConfigError};
use paddock_test_helpers::prelude::*;
use proptest::prelude::*;

#[test]
fn test_load_overrides_from_file() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "laps:\n  quick_lap_threshold: 1.05\n  iqr_factor: 3.0")?;

    let config = AnalysisConfig::load_from_path(file.path())?;
    assert_close(config.laps.quick_lap_threshold, 1.05, 1e-12);
    assert_close(config.laps.iqr_factor, 3.0, 1e-12);
    assert_eq!(config.laps.fastest_laps_per_driver, 10);
    Ok(())
}

#[test]
fn test_missing_file_is_not_found() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("absent.yaml");
    let result = AnalysisConfig::load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::NotFound(ref p)) if *p == path));
    Ok(())
}

#[test]
fn test_malformed_yaml_is_a_parse_error() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "delta: [unterminated")?;
    let result = AnalysisConfig::load_from_path(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_))), "{result:?}");
    Ok(())
}

#[test]
fn test_wrong_type_is_a_parse_error() {
    let result = AnalysisConfig::from_yaml_str("dominance:\n  mini_sectors: many\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_error_messages() {
    let invalid = AnalysisConfig::from_yaml_str("delta:\n  grid_points: 0\n");
    let message = invalid.err().map(|e| e.to_string()).unwrap_or_default();
    insta::assert_snapshot!(
        message,
        @"Invalid configuration value for 'delta.grid_points': must be at least 2, got 0"
    );
}

#[test]
fn test_round_trip_through_yaml() -> TestResult {
    let config = AnalysisConfig::from_yaml_str("dominance:\n  mini_sectors: 12\n")?;
    let yaml = serde_yaml::to_string(&config)?;
    assert_eq!(AnalysisConfig::from_yaml_str(&yaml)?, config);
    Ok(())
}

proptest! {
    #[test]
    fn in_range_overrides_are_kept(
        grid_points in 2usize..5_000,
        mini_sectors in 1usize..200,
        threshold in 1.001f64..2.0,
    ) {
        let yaml = format!(
            "delta:\n  grid_points: {grid_points}\ndominance:\n  mini_sectors: {mini_sectors}\nlaps:\n  quick_lap_threshold: {threshold}\n"
        );
        let config = AnalysisConfig::from_yaml_str(&yaml)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(config.delta.grid_points, grid_points);
        prop_assert_eq!(config.dominance.mini_sectors, mini_sectors);
        prop_assert!((config.laps.quick_lap_threshold - threshold).abs() < 1e-12);
        prop_assert_eq!(config.laps.fastest_laps_per_driver, 10);
    }

    #[test]
    fn threshold_at_or_below_one_is_rejected(threshold in 0.0f64..=1.0) {
        let yaml = format!("laps:\n  quick_lap_threshold: {threshold}\n");
        let result = AnalysisConfig::from_yaml_str(&yaml);
        prop_assert!(
            matches!(result, Err(ConfigError::Invalid { field: "laps.quick_lap_threshold", .. })),
            "{:?}",
            result
        );
    }
}
