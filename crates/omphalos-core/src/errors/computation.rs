// ABOUTME: Error type for numeric sequence computations (statistics, HRV, reconstruction)
// ABOUTME: Surfaces non-finite samples and invalid parameters instead of propagating NaN

/// Errors produced while deriving metrics from a sampled sequence
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ComputationError {
    /// A sample was NaN or infinite
    #[error("non-finite sample {value} at index {index}")]
    NonFinite {
        /// Position of the offending sample
        index: usize,
        /// The offending value
        value: f64,
    },

    /// An RR interval was negative
    #[error("negative interval {value} ms at index {index}")]
    NegativeInterval {
        /// Position of the offending interval
        index: usize,
        /// The offending value in milliseconds
        value: f64,
    },

    /// Every RR interval in the sequence was zero, so no rate can be derived
    #[error("sequence contains no positive intervals")]
    NoPositiveIntervals,

    /// A scalar parameter was outside its valid domain
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },
}

impl ComputationError {
    /// Return the first non-finite sample in `values` as an error
    ///
    /// # Errors
    ///
    /// Returns `ComputationError::NonFinite` for the first NaN or infinite value.
    pub fn check_finite(values: &[f64]) -> Result<(), Self> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(Self::NonFinite {
                index,
                value: values[index],
            }),
            None => Ok(()),
        }
    }
}
