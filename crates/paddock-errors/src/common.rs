//! Error taxonomy shared by every analysis crate.

use core::fmt;

/// Top-level analysis error.
///
/// Per-domain crates (telemetry validation, resampling, configuration) keep
/// their own error enums and convert into this one at the engine boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Fewer qualifying drivers or samples than the operation requires.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A single driver's record lacks a channel or violates an input invariant.
    #[error("Malformed input for driver '{driver}': {reason}")]
    MalformedInput {
        /// Driver abbreviation the record belongs to
        driver: String,
        /// What was wrong with the record
        reason: String,
    },

    /// Unexpected failure while interpolating or building geometry.
    #[error("Computation failed: {0}")]
    Computation(String),
}

impl AnalysisError {
    /// Create an insufficient-data error with a human-readable explanation.
    pub fn insufficient(msg: impl Into<String>) -> Self {
        AnalysisError::InsufficientData(msg.into())
    }

    /// Create an insufficient-data error describing a driver shortfall.
    pub fn too_few_drivers(required: usize, available: usize) -> Self {
        AnalysisError::InsufficientData(format!(
            "at least {required} drivers with valid laps are required, {available} available"
        ))
    }

    /// Create a malformed-input error for one driver.
    pub fn malformed(driver: impl Into<String>, reason: impl fmt::Display) -> Self {
        AnalysisError::MalformedInput {
            driver: driver.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a computation error.
    pub fn computation(msg: impl Into<String>) -> Self {
        AnalysisError::Computation(msg.into())
    }

    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalysisError::InsufficientData(_) => ErrorCategory::InsufficientData,
            AnalysisError::MalformedInput { .. } => ErrorCategory::MalformedInput,
            AnalysisError::Computation(_) => ErrorCategory::Computation,
        }
    }

    /// Whether the request can still produce useful output once the
    /// offending input is dropped.
    ///
    /// Malformed records only exclude their driver; the other categories end
    /// the request.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AnalysisError::MalformedInput { .. })
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Not enough qualifying input
    InsufficientData = 0,
    /// A record was excluded
    MalformedInput = 1,
    /// Numerical or geometric failure
    Computation = 2,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::InsufficientData => write!(f, "InsufficientData"),
            ErrorCategory::MalformedInput => write!(f, "MalformedInput"),
            ErrorCategory::Computation => write!(f, "Computation"),
        }
    }
}
