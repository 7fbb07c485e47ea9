// ABOUTME: Persistence record pairing retained wavelet coefficients with the original sample count
// ABOUTME: Little-endian binary and JSON encodings, plus parallel batch decoding with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors

//! Compressed series storage
//!
//! The coefficient vector alone does not carry the length of the sequence it
//! came from, so records always store both.
//!
//! Binary layout, all little-endian:
//!
//! | offset | type  | field                          |
//! |--------|-------|--------------------------------|
//! | 0      | `u64` | original sample count `n`      |
//! | 8      | `u64` | number of coefficients `k`     |
//! | 16     | `f64` × `k` | coefficients, coarsest first |
//!
//! A record is valid only when `n` is at most [`MAX_SERIES_LEN`] and `k` does
//! not exceed `n` rounded up to a power of two.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use omphalos_core::errors::{AppError, AppResult, CodecError, ComputationError};
use omphalos_signals::wavelet::{decode_trend, encode_with_policy, padded_len, KeepPolicy};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bytes taken by the two `u64` header fields
pub const HEADER_LEN: usize = 16;
const COEFFICIENT_LEN: usize = 8;

/// Longest sequence a record may describe (2^24 samples, over 194 days at 1 Hz)
pub const MAX_SERIES_LEN: usize = 1 << 24;

/// Wavelet coefficients together with the length they decode to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressedSeries {
    /// Leading coefficients, coarsest first
    pub coefficients: Vec<f64>,
    /// Number of samples in the original sequence
    pub count: usize,
}

impl CompressedSeries {
    /// Compress `sequence` under `policy`
    ///
    /// # Errors
    ///
    /// Returns `ComputationError::NonFinite` if any sample is NaN or infinite,
    /// and `ComputationError::InvalidParameter` if `sequence` is longer than
    /// [`MAX_SERIES_LEN`].
    pub fn compress(sequence: &[f64], policy: KeepPolicy) -> Result<Self, ComputationError> {
        if sequence.len() > MAX_SERIES_LEN {
            return Err(ComputationError::InvalidParameter {
                name: "sequence",
                reason: "longer than the maximum series length",
            });
        }
        Ok(Self {
            coefficients: encode_with_policy(sequence, policy)?,
            count: sequence.len(),
        })
    }

    /// Reconstruct the original number of samples
    ///
    /// Lossy records come back as the trend their coefficients describe over
    /// the full original length.
    #[must_use]
    pub fn decompress(&self) -> Vec<f64> {
        decode_trend(&self.coefficients, self.count)
    }

    /// Check the sample count against the coefficients it is paired with
    ///
    /// # Errors
    ///
    /// Returns `CodecError::CountOutOfRange` if `count` exceeds
    /// [`MAX_SERIES_LEN`] or is too small to have produced the coefficients.
    pub fn validate(&self) -> Result<(), CodecError> {
        let coefficients = self.coefficients.len();
        if self.count > MAX_SERIES_LEN || coefficients > padded_len(self.count) {
            return Err(CodecError::CountOutOfRange {
                count: self.count,
                coefficients,
            });
        }
        Ok(())
    }

    /// Binary encoding
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(HEADER_LEN + COEFFICIENT_LEN * self.coefficients.len());
        buf.put_u64_le(self.count as u64);
        buf.put_u64_le(self.coefficients.len() as u64);
        for &c in &self.coefficients {
            buf.put_f64_le(c);
        }
        buf.freeze()
    }

    /// Decode a record produced by [`CompressedSeries::to_bytes`]
    ///
    /// # Errors
    ///
    /// Returns `CodecError::TruncatedPayload` if the payload is shorter than the
    /// header or its body is not a whole number of doubles, and
    /// `CodecError::CountMismatch` if the header disagrees with the body, and
    /// `CodecError::CountOutOfRange` if the sample count fails [`CompressedSeries::validate`].
    pub fn from_bytes(payload: &[u8]) -> Result<Self, CodecError> {
        let len = payload.len();
        if len < HEADER_LEN || (len - HEADER_LEN) % COEFFICIENT_LEN != 0 {
            return Err(CodecError::TruncatedPayload { len });
        }
        let mut buf = payload;
        let raw_count = buf.get_u64_le();
        let declared = usize::try_from(buf.get_u64_le()).unwrap_or(usize::MAX);
        let actual = buf.remaining() / COEFFICIENT_LEN;
        if declared != actual {
            return Err(CodecError::CountMismatch { declared, actual });
        }
        let count = usize::try_from(raw_count).unwrap_or(usize::MAX);
        if count > MAX_SERIES_LEN {
            return Err(CodecError::CountOutOfRange {
                count,
                coefficients: actual,
            });
        }
        let series = Self {
            coefficients: (0..actual).map(|_| buf.get_f64_le()).collect(),
            count,
        };
        series.validate()?;
        Ok(series)
    }

    /// JSON encoding
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self)
            .map_err(|e| AppError::internal(format!("failed to serialize series: {e}")))
    }

    /// Decode a JSON record
    ///
    /// # Errors
    ///
    /// Returns an `InvalidFormat` error if the JSON does not describe a valid series.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let series: Self = serde_json::from_str(json)
            .map_err(|e| AppError::invalid_format(format!("invalid series JSON: {e}")))?;
        series.validate()?;
        Ok(series)
    }
}

/// Decompress independent records in parallel, preserving input order
#[must_use]
pub fn decode_all(records: &[CompressedSeries]) -> Vec<Vec<f64>> {
    debug!(records = records.len(), "parallel decode");
    records.par_iter().map(CompressedSeries::decompress).collect()
}

/// Parse and decompress binary records in parallel
///
/// # Errors
///
/// Returns a `CodecError` if any payload is malformed.
pub fn decode_all_bytes(payloads: &[Bytes]) -> Result<Vec<Vec<f64>>, CodecError> {
    payloads
        .par_iter()
        .map(|p| CompressedSeries::from_bytes(p).map(|series| series.decompress()))
        .collect()
}
