//! Track dominance maps.
//!
//! The lap of the first qualifying driver is cut into equal-distance
//! mini-sectors. Every driver's crossing times at the cuts are interpolated
//! from their own telemetry, and each mini-sector goes to the driver with the
//! smallest time through it. The result carries the reference path sliced per
//! mini-sector and a marker with a unit normal at every cut, ready to be
//! drawn as a colored track map.
//!
//! ```
//! use paddock_dominance::compute_track_dominance;
//!
//! let outcome = compute_track_dominance(&[]);
//! assert!(outcome.is_insufficient_data());
//! ```

#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod geometry;

pub use config::DominanceConfig;
pub use engine::{
    BoundaryMarker, DominanceEngine, DominanceReport, DriverWins, MIN_DRIVERS, MiniSector,
    compute_track_dominance,
};
pub use geometry::TrackPoint;
