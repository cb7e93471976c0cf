//! Centralized error types for paddock analysis engines
//!
//! Every public engine entry point in the workspace returns an [`Outcome`]
//! rather than a `Result`: insufficient input and computation failures are
//! part of the return type, so a presentation layer can render them without
//! ever seeing a panic or a propagated error.
//!
//! # Architecture
//!
//! - [`common`]: the [`AnalysisError`] taxonomy and its classification
//! - [`outcome`]: the `status`-tagged [`Outcome`] envelope
//! - [`prelude`]: convenience re-exports
//!
//! Engines work internally with `Result<T, AnalysisError>` and `?`, then
//! convert at their boundary with [`Outcome::from_result`].
//!
//! # Example
//!
//! ```
//! use paddock_errors::prelude::*;
//!
//! fn reference_lap(lap_times: &[f64]) -> Result<f64> {
//!     lap_times
//!         .iter()
//!         .copied()
//!         .reduce(f64::min)
//!         .ok_or_else(|| AnalysisError::insufficient("no lap times supplied"))
//! }
//!
//! let outcome = Outcome::from_result(reference_lap(&[]));
//! assert!(outcome.is_insufficient_data());
//! ```

#![deny(clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod outcome;
pub mod prelude;

pub use common::{AnalysisError, ErrorCategory};
pub use outcome::{Outcome, OutcomeStatus};

/// A specialized `Result` type for analysis internals.
pub type Result<T> = std::result::Result<T, AnalysisError>;
