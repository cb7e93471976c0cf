//! Dominance engine configuration.

use serde::{Deserialize, Serialize};

/// Tunables for [`DominanceEngine`](crate::DominanceEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DominanceConfig {
    /// Number of equal-distance mini-sectors the lap is split into.
    pub mini_sectors: usize,
}

impl DominanceConfig {
    /// Default mini-sector count.
    pub const DEFAULT_MINI_SECTORS: usize = 10;
}

impl Default for DominanceConfig {
    fn default() -> Self {
        Self {
            mini_sectors: Self::DEFAULT_MINI_SECTORS,
        }
    }
}
