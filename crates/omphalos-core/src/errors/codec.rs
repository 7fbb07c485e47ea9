// ABOUTME: Error type for the fixed-width byte encoding of compressed series
// ABOUTME: Reports truncated payloads, header mismatches and out-of-range sample counts

/// Errors produced while decoding persisted coefficient payloads
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Payload length is not a whole number of 8-byte doubles plus header
    #[error("payload of {len} bytes is not a valid coefficient record")]
    TruncatedPayload {
        /// Length of the rejected payload in bytes
        len: usize,
    },

    /// Header declared a coefficient count that disagrees with the body
    #[error("header declares {declared} coefficients but payload holds {actual}")]
    CountMismatch {
        /// Count from the header
        declared: usize,
        /// Count implied by the payload length
        actual: usize,
    },

    /// Sample count exceeds the supported maximum or cannot hold the coefficients
    #[error("sample count {count} is out of range for {coefficients} coefficients")]
    CountOutOfRange {
        /// Sample count from the record
        count: usize,
        /// Number of coefficients in the record
        coefficients: usize,
    },
}
