//! Prelude module for convenient error handling imports.
//!
//! ```
//! use paddock_errors::prelude::*;
//!
//! fn check(drivers: usize) -> Result<()> {
//!     if drivers < 2 {
//!         return Err(AnalysisError::too_few_drivers(2, drivers));
//!     }
//!     Ok(())
//! }
//! # assert!(check(1).is_err());
//! ```

pub use crate::{AnalysisError, ErrorCategory, Outcome, OutcomeStatus, Result};
