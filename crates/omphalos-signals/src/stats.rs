// ABOUTME: Single-pass sequence statistics using Welford's online algorithm
// ABOUTME: Also provides the difference and prefix-sum primitives used by HRV and energy

//! Sequence statistics
//!
//! See Welford's online algorithm:
//! <https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance>
//!
//! `stdev` in [`StatisticsSummary`] is the population variance `m2 / count`.
//! HRV metrics are defined on top of this exact value, so it is not renamed or
//! square-rooted.

use serde::{Deserialize, Serialize};

/// Summary of a sequence produced in a single pass
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// Number of samples
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance (`m2 / count`)
    pub stdev: f64,
    /// Root mean square
    pub rms: f64,
}

#[derive(Debug, Clone, Copy, Default)]
struct WelfordAccumulator {
    n: usize,
    mean: f64,
    m2: f64,
    sum_squares: f64,
}

impl WelfordAccumulator {
    fn push(mut self, x: f64) -> Self {
        self.n += 1;
        let d1 = x - self.mean;
        self.mean += d1 / self.n as f64;
        let d2 = x - self.mean;
        self.m2 += d1 * d2;
        self.sum_squares += x * x;
        self
    }

    fn finish(self) -> StatisticsSummary {
        if self.n == 0 {
            return StatisticsSummary::default();
        }
        let count = self.n as f64;
        StatisticsSummary {
            count: self.n,
            mean: self.mean,
            stdev: self.m2 / count,
            rms: (self.sum_squares / count).sqrt(),
        }
    }
}

/// Compute count, mean, population variance and rms of `xs` in one pass
///
/// An empty slice yields an all-zero summary.
#[must_use]
pub fn welford_stats(xs: &[f64]) -> StatisticsSummary {
    xs.iter()
        .fold(WelfordAccumulator::default(), |acc, &x| acc.push(x))
        .finish()
}

/// Elementwise differences with a leading zero: `ys[0] = 0`, `ys[i] = xs[i] - xs[i-1]`
#[must_use]
pub fn diff(xs: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(xs.len());
    if xs.is_empty() {
        return out;
    }
    out.push(0.0);
    out.extend(xs.windows(2).map(|w| w[1] - w[0]));
    out
}

/// Inclusive prefix sums with an implicit leading zero; output length is `len + 1`
#[must_use]
pub fn cumsum(xs: &[f64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(xs.len() + 1);
    let mut total = 0.0;
    out.push(total);
    for &x in xs {
        total += x;
        out.push(total);
    }
    out
}

/// Sum of all values
#[must_use]
pub fn sum(xs: &[f64]) -> f64 {
    xs.iter().sum()
}

/// Arithmetic mean, or `None` for an empty slice
#[must_use]
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        None
    } else {
        Some(sum(xs) / xs.len() as f64)
    }
}

/// Last element, if any
#[must_use]
pub fn last(xs: &[f64]) -> Option<f64> {
    xs.last().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_sequence_summary() {
        let summary = welford_stats(&[5.0, 5.0, 5.0, 5.0]);
        assert_eq!(summary.count, 4);
        assert!((summary.mean - 5.0).abs() < 1e-12);
        assert!(summary.stdev.abs() < 1e-12);
        assert!((summary.rms - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_population_variance_convention() {
        // Population variance of [2,4,4,4,5,5,7,9] is exactly 4
        let summary = welford_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((summary.mean - 5.0).abs() < 1e-12);
        assert!((summary.stdev - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_summary_is_zero() {
        assert_eq!(welford_stats(&[]), StatisticsSummary::default());
    }

    #[test]
    fn test_diff_keeps_length_with_leading_zero() {
        assert_eq!(diff(&[800.0, 820.0, 800.0]), vec![0.0, 20.0, -20.0]);
        assert!(diff(&[]).is_empty());
        assert_eq!(diff(&[3.0]), vec![0.0]);
    }

    #[test]
    fn test_cumsum_has_leading_zero() {
        assert_eq!(cumsum(&[1.0, 2.0, 3.0]), vec![0.0, 1.0, 3.0, 6.0]);
        assert_eq!(cumsum(&[]), vec![0.0]);
    }

    #[test]
    fn test_mean_and_last() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 3.0]), Some(2.0));
        assert_eq!(last(&[1.0, 3.0]), Some(3.0));
        assert_eq!(last(&[]), None);
    }
}
