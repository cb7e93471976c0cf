//! Error types for resampling.

/// Why an interpolation table could not be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResampleError {
    /// No sample points.
    #[error("interpolation table is empty")]
    Empty,

    /// `xp` and `fp` differ in length.
    #[error("interpolation table has {xp} x values but {fp} y values")]
    LengthMismatch {
        /// Length of the x column
        xp: usize,
        /// Length of the y column
        fp: usize,
    },

    /// A sample is NaN or infinite.
    #[error("interpolation table has a non-finite value at index {index}")]
    NonFinite {
        /// First offending index
        index: usize,
    },

    /// The x column decreases.
    #[error("interpolation x values decrease at index {index}")]
    NotMonotonic {
        /// First index lower than its predecessor
        index: usize,
    },
}
