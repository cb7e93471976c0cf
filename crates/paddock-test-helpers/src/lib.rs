//! Shared test utilities for paddock.
//!
//! - [`mod@must`] - Unwrap helpers with `#[track_caller]`
//! - [`fixtures`] - Synthetic lap builders with known sector timing
//! - [`prelude`] - Convenience re-exports
//!
//! ```toml
//! [dev-dependencies]
//! paddock-test-helpers = { workspace = true }
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod fixtures;
pub mod must;
pub mod prelude;

pub use must::*;
