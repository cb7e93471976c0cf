//! Typed lap telemetry contracts for paddock analysis engines.
//!
//! The data access layer (session loading, lap picking) lives outside this
//! workspace. It hands the engines one [`DriverLapRecord`] per driver: an
//! abbreviation, the official lap and sector times, and a columnar
//! [`LapTelemetry`] trace. Records are plain values; engines borrow them and
//! never mutate them.

#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod error;
pub mod record;
pub mod sectors;
pub mod telemetry;

pub use error::TelemetryError;
pub use record::DriverLapRecord;
pub use sectors::{CumulativeSectors, SectorTimes};
pub use telemetry::{LapTelemetry, MIN_SAMPLES};
