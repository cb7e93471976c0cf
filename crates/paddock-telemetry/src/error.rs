//! Validation errors for lap telemetry and timing input.

/// Why a lap record cannot take part in an analysis.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TelemetryError {
    /// Fewer samples than an interpolation needs.
    #[error("telemetry has {actual} samples, at least {min} required")]
    TooFewSamples {
        /// Samples present
        actual: usize,
        /// Samples required
        min: usize,
    },

    /// A column's length differs from the distance column.
    #[error("channel '{channel}' has {actual} samples, expected {expected}")]
    LengthMismatch {
        /// Channel name
        channel: String,
        /// Length of the distance column
        expected: usize,
        /// Length of this channel
        actual: usize,
    },

    /// A column holds NaN or an infinity.
    #[error("channel '{channel}' has a non-finite value at sample {index}")]
    NonFinite {
        /// Channel name
        channel: String,
        /// First offending sample
        index: usize,
    },

    /// Distance or elapsed time goes backwards.
    #[error("channel '{channel}' decreases at sample {index}")]
    NotMonotonic {
        /// Channel name
        channel: String,
        /// First sample lower than its predecessor
        index: usize,
    },

    /// A channel the operation needs is absent.
    #[error("missing channel '{0}'")]
    MissingChannel(String),

    /// The record has no usable lap time.
    #[error("no valid lap time")]
    MissingLapTime,

    /// A lap or sector time is zero, negative or non-finite.
    #[error("invalid {field} time {value}")]
    InvalidTime {
        /// Which time
        field: &'static str,
        /// The rejected value
        value: f64,
    },
}
