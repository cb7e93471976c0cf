//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use paddock_test_helpers::prelude::*;
//! ```

pub use crate::fixtures::{LapFixture, circuit_point};
pub use crate::must::{assert_close, must, must_some, must_with};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
