// ABOUTME: Reconstructs a regular 1 Hz heart-rate sequence from irregular RR intervals
// ABOUTME: Linear interpolation of instantaneous rate over cumulative beat times

//! Heart-rate reconstruction
//!
//! Beat times are the prefix sums of the RR intervals. For each whole second
//! `t` from `0` through `floor(total_ms / 1000)` a monotonic pointer finds the
//! beat interval containing `1000 * t` and the rate is interpolated between the
//! instantaneous rates `60000 / rr` of that interval and the next one.

use crate::stats::cumsum;
use omphalos_core::constants::heart_rate::{MS_PER_MINUTE, MS_PER_SECOND};
use omphalos_core::errors::ComputationError;
use tracing::debug;

/// Longest session, in seconds, that [`heart_rate_sequence`] will reconstruct (one week)
pub const MAX_SESSION_SECONDS: u32 = 604_800;

/// Heart rate in beats per minute at 1 Hz, one sample per covered second
///
/// Fewer than two intervals yields an empty sequence. Zero-length intervals are
/// tolerated: wherever an interpolation bracket has zero width or a beat has no
/// rate, the nearest positive interval's rate is substituted.
///
/// # Errors
///
/// Returns `ComputationError` if an interval is non-finite or negative, if
/// every interval is zero, or if the intervals span more than
/// [`MAX_SESSION_SECONDS`].
pub fn heart_rate_sequence(rr: &[f64]) -> Result<Vec<f64>, ComputationError> {
    if rr.len() < 2 {
        return Ok(Vec::new());
    }
    validate_intervals(rr)?;
    let rates = nearest_rates(rr).ok_or(ComputationError::NoPositiveIntervals)?;

    let m = rr.len();
    let elapsed = cumsum(rr);
    let total_seconds = elapsed[m] / MS_PER_SECOND;
    if total_seconds > f64::from(MAX_SESSION_SECONDS) {
        return Err(session_too_long());
    }
    let seconds = total_seconds.floor() as usize;
    let capacity = seconds.checked_add(1).ok_or_else(session_too_long)?;

    let mut out = Vec::with_capacity(capacity);
    let mut i = 0;
    for t in 0..=seconds {
        let now = t as f64 * MS_PER_SECOND;
        while i < m && elapsed[i] <= now {
            i += 1;
        }

        let lo = rates[i - 1];
        let hi = rates.get(i).copied().unwrap_or(lo);
        let width = elapsed[i] - elapsed[i - 1];
        let a = if width > 0.0 {
            ((now - elapsed[i - 1]) / width).clamp(0.0, 1.0)
        } else {
            0.0
        };
        out.push((1.0 - a).mul_add(lo, a * hi));
    }

    debug!(intervals = m, seconds = out.len(), "heart rate reconstructed");
    Ok(out)
}

const fn session_too_long() -> ComputationError {
    ComputationError::InvalidParameter {
        name: "rr",
        reason: "intervals span more than the maximum session length",
    }
}

/// Rate of every interval, zero intervals taking the nearest positive one
///
/// Ties go to the earlier interval. `None` when no interval is positive.
fn nearest_rates(rr: &[f64]) -> Option<Vec<f64>> {
    let rate = |x: f64| (x > 0.0).then(|| MS_PER_MINUTE / x);

    let mut last = None;
    let before: Vec<Option<(usize, f64)>> = rr
        .iter()
        .enumerate()
        .map(|(j, &x)| {
            if let Some(r) = rate(x) {
                last = Some((j, r));
            }
            last
        })
        .collect();

    let mut next = None;
    let mut rates: Vec<f64> = rr
        .iter()
        .enumerate()
        .rev()
        .map(|(j, &x)| {
            if let Some(r) = rate(x) {
                next = Some((j, r));
            }
            match (before[j], next) {
                (Some((p, lo)), Some((q, hi))) => Some(if j - p <= q - j { lo } else { hi }),
                (Some((_, r)), None) | (None, Some((_, r))) => Some(r),
                (None, None) => None,
            }
        })
        .collect::<Option<_>>()?;
    rates.reverse();
    Some(rates)
}

fn validate_intervals(rr: &[f64]) -> Result<(), ComputationError> {
    ComputationError::check_finite(rr)?;
    match rr.iter().position(|&x| x < 0.0) {
        Some(index) => Err(ComputationError::NegativeInterval {
            index,
            value: rr[index],
        }),
        None => Ok(()),
    }
}
