// ABOUTME: Lossy Haar wavelet codec for irregular sampled sequences (RR intervals, GPS, steps)
// ABOUTME: Encodes to coarsest-first coefficients and decodes with zero-filled detail levels

//! Haar wavelet codec
//!
//! `encode` performs a full orthonormal Haar decomposition and keeps only the
//! leading (coarsest) coefficients. `decode` rebuilds the dyadic tree from a
//! read cursor over the coefficients, zero-filling every detail coefficient the
//! input no longer holds, inverts the transform and truncates or zero-pads the
//! result to exactly `n` samples.
//!
//! # Coefficient layout
//!
//! Sequences are zero-padded to the next power of two. Each step pairs neighbours into `((a + b) / √2, (a - b) / √2)` until
//! a single approximation remains. The flat layout is:
//!
//! ```text
//! [approximation, 1 detail, 2 details, 4 details, ..., P/2 details]
//! ```
//!
//! The groups double at every level, so the layout of a coefficient prefix
//! never depends on how many samples are requested. `decode` inverts over the
//! dyadic length the coefficients imply; asking for fewer samples truncates
//! that output and asking for more appends zeros. [`decode_trend`] instead
//! zero-fills levels down to the depth of a known encoded length, which is how
//! stored lossy series come back at their original length.

use omphalos_core::errors::{AppError, ComputationError};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How many leading coefficients to keep when encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy", content = "value")]
pub enum KeepPolicy {
    /// Keep `1 + floor(sqrt(n))` coefficients
    #[default]
    SqrtLength,
    /// Keep a fixed number of coefficients
    Fixed(usize),
    /// Keep everything except the given number of finest detail levels
    DropFinestLevels(u32),
}

/// Policy applied by [`encode_default`]
pub const DEFAULT_KEEP_POLICY: KeepPolicy = KeepPolicy::SqrtLength;

impl KeepPolicy {
    /// Number of coefficients this policy keeps for a sequence of length `n`
    #[must_use]
    pub fn resolve(self, n: usize) -> usize {
        match self {
            Self::SqrtLength => default_keep(n),
            Self::Fixed(keep) => keep,
            Self::DropFinestLevels(levels) => {
                if n == 0 {
                    return 0;
                }
                padded_len(n).checked_shr(levels).unwrap_or(0).max(1)
            }
        }
    }
}

impl fmt::Display for KeepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SqrtLength => f.write_str("sqrt"),
            Self::Fixed(keep) => write!(f, "{keep}"),
            Self::DropFinestLevels(levels) => write!(f, "drop:{levels}"),
        }
    }
}

impl FromStr for KeepPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "sqrt" || s == "default" {
            return Ok(Self::SqrtLength);
        }
        if let Some(levels) = s.strip_prefix("drop:") {
            return levels.parse().map(Self::DropFinestLevels).map_err(|_| {
                AppError::config(format!("Invalid level count in keep policy: '{s}'"))
            });
        }
        s.parse().map(Self::Fixed).map_err(|_| {
            AppError::config(format!(
                "Unknown keep policy: '{s}'. Valid options: sqrt, <count>, drop:<levels>"
            ))
        })
    }
}

/// Default number of coefficients kept for a sequence of length `n`: `1 + floor(sqrt(n))`
#[must_use]
pub fn default_keep(n: usize) -> usize {
    1 + (n as f64).sqrt().floor() as usize
}

/// Length a sequence of `n` samples is padded to before decomposition
///
/// Zero for an empty sequence, otherwise the next power of two.
#[must_use]
pub const fn padded_len(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        n.next_power_of_two()
    }
}

/// Sizes of the coefficient groups for a sequence of length `n`, coarsest first
///
/// The first group is the single approximation coefficient; each following
/// group holds one level of detail coefficients and is twice the size of the
/// one before. The sizes sum to [`padded_len`]`(n)`.
#[must_use]
pub fn level_sizes(n: usize) -> Vec<usize> {
    let padded = padded_len(n);
    if padded == 0 {
        return Vec::new();
    }
    let mut groups = vec![1];
    let mut size = 1;
    while size < padded {
        groups.push(size);
        size *= 2;
    }
    groups
}

/// Encode `sequence` and keep its first `keep` coefficients
///
/// A `keep` at or above the sequence length retains the whole padded
/// decomposition, so `encode(x, x.len())` is lossless for every length.
///
/// # Errors
///
/// Returns `ComputationError::NonFinite` if any sample is NaN or infinite.
pub fn encode(sequence: &[f64], keep: usize) -> Result<Vec<f64>, ComputationError> {
    ComputationError::check_finite(sequence)?;
    let mut coefficients = forward(sequence);
    if keep < sequence.len() {
        coefficients.truncate(keep);
    }
    debug!(
        samples = sequence.len(),
        kept = coefficients.len(),
        "wavelet encode"
    );
    Ok(coefficients)
}

/// Encode `sequence` with [`DEFAULT_KEEP_POLICY`]
///
/// # Errors
///
/// Returns `ComputationError::NonFinite` if any sample is NaN or infinite.
pub fn encode_default(sequence: &[f64]) -> Result<Vec<f64>, ComputationError> {
    encode_with_policy(sequence, DEFAULT_KEEP_POLICY)
}

/// Encode `sequence`, keeping as many coefficients as `policy` resolves to
///
/// # Errors
///
/// Returns `ComputationError::NonFinite` if any sample is NaN or infinite.
pub fn encode_with_policy(
    sequence: &[f64],
    policy: KeepPolicy,
) -> Result<Vec<f64>, ComputationError> {
    encode(sequence, policy.resolve(sequence.len()))
}

/// Reconstruct `n` samples from leading wavelet coefficients
///
/// The inverse runs over the dyadic length the coefficients imply, with the
/// unfilled part of the last level treated as zero. The result is then
/// truncated or zero-padded to `n`, so `decode(c, k)` is always a prefix of
/// `decode(c, n)` for `k < n`. Empty `coefficients` or `n == 0` yields an
/// empty sequence.
#[must_use]
pub fn decode(coefficients: &[f64], n: usize) -> Vec<f64> {
    if coefficients.is_empty() || n == 0 {
        return Vec::new();
    }
    let mut samples = inverse(coefficients, padded_len(coefficients.len()));
    samples.resize(n, 0.0);
    samples
}

/// Reconstruct the trend of a sequence originally `len` samples long
///
/// Detail levels down to the depth of `len` that the coefficients no longer
/// hold are zero-filled, which recovers only the trend the kept coefficients
/// describe at the original time scale. Empty `coefficients` or `len == 0`
/// yields an empty sequence.
#[must_use]
pub fn decode_trend(coefficients: &[f64], len: usize) -> Vec<f64> {
    if coefficients.is_empty() || len == 0 {
        return Vec::new();
    }
    let depth = padded_len(len).max(padded_len(coefficients.len()));
    let mut samples = inverse(coefficients, depth);
    samples.resize(len, 0.0);
    samples
}

/// Inverse transform over `padded` samples, reading coefficients coarsest first
fn inverse(coefficients: &[f64], padded: usize) -> Vec<f64> {
    let mut cursor = CoefficientCursor::new(coefficients);
    let mut approx = vec![cursor.next_or_zero()];
    while approx.len() < padded {
        let mut out = Vec::with_capacity(approx.len() * 2);
        for &a in &approx {
            let d = cursor.next_or_zero();
            out.push((a + d) * FRAC_1_SQRT_2);
            out.push((a - d) * FRAC_1_SQRT_2);
        }
        approx = out;
    }
    approx
}

/// Full forward transform, coarsest-first flat layout
fn forward(sequence: &[f64]) -> Vec<f64> {
    if sequence.is_empty() {
        return Vec::new();
    }
    let mut approx = sequence.to_vec();
    approx.resize(padded_len(sequence.len()), 0.0);
    let mut details: Vec<Vec<f64>> = Vec::new();
    while approx.len() > 1 {
        let (next, detail): (Vec<f64>, Vec<f64>) = approx
            .chunks_exact(2)
            .map(|pair| {
                (
                    (pair[0] + pair[1]) * FRAC_1_SQRT_2,
                    (pair[0] - pair[1]) * FRAC_1_SQRT_2,
                )
            })
            .unzip();
        details.push(detail);
        approx = next;
    }

    let mut flat = Vec::with_capacity(padded_len(sequence.len()));
    flat.extend(approx);
    for level in details.into_iter().rev() {
        flat.extend(level);
    }
    flat
}

/// Read cursor over an immutable coefficient slice that yields zero once exhausted
struct CoefficientCursor<'a> {
    coefficients: &'a [f64],
    position: usize,
}

impl<'a> CoefficientCursor<'a> {
    const fn new(coefficients: &'a [f64]) -> Self {
        Self {
            coefficients,
            position: 0,
        }
    }

    fn next_or_zero(&mut self) -> f64 {
        let value = self.coefficients.get(self.position).copied().unwrap_or(0.0);
        self.position += 1;
        value
    }
}
