//! The combined analysis configuration.

use std::path::Path;

use paddock_analysis::LapAnalysisConfig;
use paddock_delta::DeltaConfig;
use paddock_dominance::DominanceConfig;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};

/// The embedded default configuration.
pub const DEFAULT_CONFIG_YAML: &str = include_str!("default_config.yaml");

/// Settings for every engine, as read from YAML.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Delta engine settings.
    pub delta: DeltaConfig,
    /// Dominance engine settings.
    pub dominance: DominanceConfig,
    /// Lap selection and outlier settings for session analytics.
    pub laps: LapAnalysisConfig,
}

impl AnalysisConfig {
    /// The embedded defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the embedded YAML is malformed.
    pub fn embedded() -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(DEFAULT_CONFIG_YAML)?)
    }

    /// Parses `yaml` over the embedded defaults and validates the result.
    ///
    /// Keys missing from `yaml` keep their default values; an empty document
    /// yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let mut merged: Value = serde_yaml::from_str(DEFAULT_CONFIG_YAML)?;
        let overlay: Value = serde_yaml::from_str(yaml)?;
        merge(&mut merged, overlay);

        let config: Self = serde_yaml::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a YAML file; see [`from_yaml_str`](Self::from_yaml_str).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when `path` does not exist,
    /// [`ConfigError::Io`] when it cannot be read, and any error of
    /// [`from_yaml_str`](Self::from_yaml_str).
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let config = Self::from_yaml_str(&yaml)?;
        info!(path = %path.display(), "Loaded analysis configuration");
        debug!(?config, "Effective configuration");
        Ok(config)
    }

    /// Checks every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.delta.grid_points < 2 {
            return Err(ConfigError::invalid(
                "delta.grid_points",
                format!("must be at least 2, got {}", self.delta.grid_points),
            ));
        }
        if !(self.delta.min_common_distance.is_finite() && self.delta.min_common_distance >= 0.0) {
            return Err(ConfigError::invalid(
                "delta.min_common_distance",
                "must be a non-negative number",
            ));
        }
        if self.dominance.mini_sectors < 1 {
            return Err(ConfigError::invalid(
                "dominance.mini_sectors",
                "must be at least 1",
            ));
        }
        if !(self.laps.quick_lap_threshold.is_finite() && self.laps.quick_lap_threshold > 1.0) {
            return Err(ConfigError::invalid(
                "laps.quick_lap_threshold",
                format!("must be greater than 1.0, got {}", self.laps.quick_lap_threshold),
            ));
        }
        if self.laps.fastest_laps_per_driver == 0 {
            return Err(ConfigError::invalid(
                "laps.fastest_laps_per_driver",
                "must be at least 1",
            ));
        }
        if !(self.laps.iqr_factor.is_finite() && self.laps.iqr_factor >= 0.0) {
            return Err(ConfigError::invalid(
                "laps.iqr_factor",
                "must be a non-negative number",
            ));
        }
        Ok(())
    }
}

/// Recursively overlays mappings in `overlay` onto `base`; any other value
/// replaces the base value. A null overlay (empty document) changes nothing.
fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
