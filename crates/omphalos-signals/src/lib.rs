// ABOUTME: Physiological signal algorithms for compressed storage and derived metrics
// ABOUTME: Haar wavelet codec, Welford statistics, 1 Hz heart rate, HRV and Keytel energy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors

#![deny(unsafe_code)]

//! # Omphalos Signals
//!
//! Stateless numeric algorithms over sampled sensor sequences. Every function is
//! pure and deterministic: the same input yields bit-identical output, so
//! persisted wavelet coefficients decode the same way across versions.
//!
//! Dependency order, leaves first:
//!
//! - [`stats`] and [`wavelet`] are independent leaves
//! - [`heart_rate`] and [`hrv`] build on [`stats`]
//! - [`energy`] consumes a reconstructed heart-rate sequence
//!
//! The [`measurement`] and [`motion`] modules decode raw sensor payloads into the
//! sequences the algorithms consume; [`physiology`] holds the scalar estimators
//! (maximum heart rate, VO2max) that parameterize energy estimation.

/// Cumulative metabolic energy from heart rate (Keytel et al. 2005)
pub mod energy;

/// 1 Hz heart-rate reconstruction from RR intervals
pub mod heart_rate;

/// Heart-rate variability metrics (SDRR, RMSSD)
pub mod hrv;

/// GATT heart rate measurement characteristic decoding
pub mod measurement;

/// Accelerometer magnitude helpers for step detection
pub mod motion;

/// Age-predicted maximum heart rate and VO2max estimators
pub mod physiology;

/// Single-pass statistics, differences and prefix sums
pub mod stats;

/// Lossy Haar wavelet codec
pub mod wavelet;

pub use energy::{cumulative_energy_joules, EnergyProfile, RegressionModel};
pub use heart_rate::heart_rate_sequence;
pub use hrv::{rmssd, sdrr, HrvSummary};
pub use measurement::{parse_heart_rate_measurement, HeartRateMeasurement};
pub use physiology::Sex;
pub use stats::{cumsum, diff, welford_stats, StatisticsSummary};
pub use wavelet::{decode, decode_trend, default_keep, encode, encode_default, KeepPolicy};
