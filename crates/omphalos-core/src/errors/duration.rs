// ABOUTME: Error type for parsing compact duration strings such as "2m 5s"
// ABOUTME: Replaces the silent NaN the duration parser would otherwise produce

/// Errors produced while parsing a compact duration string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
    /// Input was empty or only whitespace
    #[error("duration text is empty")]
    Empty,

    /// Input did not match the digit-only or unit-letter grammar
    #[error("malformed duration '{input}'")]
    Malformed {
        /// The rejected input, whitespace stripped
        input: String,
    },

    /// A numeric component could not be parsed
    #[error("invalid number '{token}' in duration")]
    InvalidNumber {
        /// The rejected numeric token
        token: String,
    },
}
