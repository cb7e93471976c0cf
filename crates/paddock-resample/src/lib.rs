//! Distance/time resampling shared by the delta and dominance engines.
//!
//! Lap telemetry arrives sampled at irregular distances. Both engines need
//! values at distances of their own choosing: the delta engine at a common
//! grid, the dominance engine at mini-sector boundaries. This crate provides
//! the pieces:
//!
//! - [`linspace`]: evenly spaced grids
//! - [`Interpolator`]: piecewise-linear lookup, O(log n) per query
//! - [`first_index_at_or_above`]: binary search on a monotonic column
//!
//! Nothing here allocates beyond the returned vectors or keeps references
//! past the borrow of its inputs.

#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod grid;
pub mod interp;

pub use error::ResampleError;
pub use grid::{first_index_at_or_above, is_non_decreasing, is_strictly_increasing, linspace};
pub use interp::Interpolator;
