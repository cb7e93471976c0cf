//! Configuration for the paddock analysis engines.
//!
//! Defaults ship embedded in the crate as YAML. A user file only needs the
//! keys it changes:
//!
//! ```
//! use paddock_config::AnalysisConfig;
//!
//! let config = AnalysisConfig::from_yaml_str("dominance:\n  mini_sectors: 20\n")?;
//! assert_eq!(config.dominance.mini_sectors, 20);
//! assert_eq!(config.delta.grid_points, 500);
//! # Ok::<(), paddock_config::ConfigError>(())
//! ```
//!
//! Nothing here reads environment variables.

#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod analysis;
pub mod error;

pub use analysis::{AnalysisConfig, DEFAULT_CONFIG_YAML};
pub use error::{ConfigError, ConfigResult};
