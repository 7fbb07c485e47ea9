// ABOUTME: Time-domain heart-rate variability metrics computed from RR intervals
// ABOUTME: SDRR from the population variance and RMSSD over leading-zero differences

//! Heart-rate variability metrics
//!
//! See <https://ncbi.nlm.nih.gov/pmc/articles/PMC5624990/>.
//!
//! Both metrics follow the stored-data convention rather than the
//! textbook definitions:
//!
//! - `sdrr` is the population variance reported by [`welford_stats`]
//! - `rmssd` is the rms of [`diff`], which includes a zero first difference

use crate::stats::{diff, welford_stats};
use omphalos_core::errors::ComputationError;
use serde::{Deserialize, Serialize};

/// Standard deviation of RR intervals as stored (population variance)
///
/// Returns `0.0` for fewer than two intervals.
///
/// # Errors
///
/// Returns `ComputationError::NonFinite` if any interval is NaN or infinite.
pub fn sdrr(rr: &[f64]) -> Result<f64, ComputationError> {
    if rr.len() < 2 {
        return Ok(0.0);
    }
    ComputationError::check_finite(rr)?;
    Ok(welford_stats(rr).stdev)
}

/// Root mean square of successive differences, leading zero included
///
/// Returns `0.0` for fewer than two intervals.
///
/// # Errors
///
/// Returns `ComputationError::NonFinite` if any interval is NaN or infinite.
pub fn rmssd(rr: &[f64]) -> Result<f64, ComputationError> {
    if rr.len() < 2 {
        return Ok(0.0);
    }
    ComputationError::check_finite(rr)?;
    Ok(welford_stats(&diff(rr)).rms)
}

/// HRV metrics for one recording
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HrvSummary {
    /// Number of RR intervals
    pub count: usize,
    /// Mean RR interval in milliseconds
    pub mean_rr_ms: f64,
    /// See [`sdrr`]
    pub sdrr: f64,
    /// See [`rmssd`]
    pub rmssd: f64,
}

impl HrvSummary {
    /// Compute all metrics for `rr`
    ///
    /// # Errors
    ///
    /// Returns `ComputationError::NonFinite` if any interval is NaN or infinite.
    pub fn from_intervals(rr: &[f64]) -> Result<Self, ComputationError> {
        ComputationError::check_finite(rr)?;
        Ok(Self {
            count: rr.len(),
            mean_rr_ms: welford_stats(rr).mean,
            sdrr: sdrr(rr)?,
            rmssd: rmssd(rr)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdrr_of_constant_is_zero() {
        assert!(sdrr(&[800.0, 800.0, 800.0]).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_rmssd_includes_leading_zero() {
        let expected = (800.0_f64 / 3.0).sqrt();
        let value = rmssd(&[800.0, 820.0, 800.0]).unwrap();
        assert!((value - expected).abs() < 1e-9);
        assert!((value - 16.33).abs() < 0.01);
    }

    #[test]
    fn test_short_input_yields_zero() {
        assert_eq!(sdrr(&[900.0]).unwrap(), 0.0);
        assert_eq!(rmssd(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_summary() {
        let summary = HrvSummary::from_intervals(&[800.0, 820.0, 800.0]).unwrap();
        assert_eq!(summary.count, 3);
        assert!((summary.mean_rr_ms - 806.666_666_666).abs() < 1e-6);
        assert!(summary.sdrr > 0.0);
    }

    #[test]
    fn test_rejects_nan() {
        assert!(rmssd(&[800.0, f64::NAN]).is_err());
    }
}
