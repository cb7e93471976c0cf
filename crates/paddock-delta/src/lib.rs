//! Sector-anchored lap delta curves.
//!
//! Given one fastest lap per driver, the [`DeltaEngine`] picks the driver
//! with the fastest official lap as the reference, resamples every lap's
//! elapsed time onto a common distance grid and reports each driver's time
//! gap to the reference along the lap.
//!
//! A delta built from telemetry alone drifts away from the timing screens,
//! so each trace is pinned to the official gaps: at the start (zero), at the
//! two sector boundaries located on the reference lap and at the end of the
//! grid (the lap-time gap). When sector times are incomplete the trace is
//! pinned at the finish only, with a linear ramp from the start.
//!
//! Sign convention: a positive delta means the driver is behind the
//! reference at that distance.
//!
//! ```
//! use paddock_delta::compute_delta;
//!
//! // No drivers at all: reported, not raised.
//! let outcome = compute_delta(&[]);
//! assert!(outcome.is_insufficient_data());
//! ```

#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod config;
mod correction;
pub mod engine;
pub mod sectors;

pub use config::DeltaConfig;
pub use correction::{Anchor, Correction};
pub use engine::{DeltaEngine, DeltaReport, DeltaTrace, MIN_DRIVERS, compute_delta};
pub use sectors::SectorBoundaries;
