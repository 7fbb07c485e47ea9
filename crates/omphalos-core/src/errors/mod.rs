// ABOUTME: Unified error handling for Omphalos signal computations and codecs
// ABOUTME: Defines ErrorCode, AppError and re-exports the domain-specific error enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors

//! # Error Handling
//!
//! Every numeric operation in the library is total over well-formed input: empty
//! sequences produce empty results, not errors. The enums in this module cover
//! the remaining cases (non-finite samples, malformed duration text, truncated
//! payloads) so that callers running inside an event loop never panic.

mod codec;
mod computation;
mod duration;

pub use codec::CodecError;
pub use computation::ComputationError;
pub use duration::DurationParseError;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard error codes used throughout the library
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input sequence or argument rejected
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Text or payload could not be decoded
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric value outside its valid domain
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Configuration value could not be used
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected failure inside the library
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Short human-readable description of the error class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The input is not in the expected format",
            Self::ValueOutOfRange => "A numeric value is outside its valid range",
            Self::ConfigInvalid => "Configuration value is invalid",
            Self::InternalError => "Internal error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Application error carrying a stable code and a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code:?}: {message}")]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Human-readable detail
    pub message: String,
}

/// Result alias for operations that fail with [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with an explicit code
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create an invalid format error
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Serialize the error as a JSON object for structured output
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        })
    }
}

impl From<ComputationError> for AppError {
    fn from(error: ComputationError) -> Self {
        let code = match error {
            ComputationError::NonFinite { .. } | ComputationError::NegativeInterval { .. } => {
                ErrorCode::ValueOutOfRange
            }
            ComputationError::NoPositiveIntervals | ComputationError::InvalidParameter { .. } => {
                ErrorCode::InvalidInput
            }
        };
        Self::new(code, error.to_string())
    }
}

impl From<DurationParseError> for AppError {
    fn from(error: DurationParseError) -> Self {
        Self::invalid_format(error.to_string())
    }
}

impl From<CodecError> for AppError {
    fn from(error: CodecError) -> Self {
        Self::invalid_format(error.to_string())
    }
}
