// ABOUTME: Main library entry point for the Omphalos physiological time-series toolkit
// ABOUTME: Re-exports the signal algorithms and adds duration, units, storage, config and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors

#![deny(unsafe_code)]

//! # Omphalos
//!
//! Compression and metrics for wearable sensor streams: RR intervals, heart
//! rate, accelerometer magnitudes and the durations shown beside them.
//!
//! ## Architecture
//!
//! - **Signals** (`omphalos-signals`): wavelet codec, statistics, heart rate,
//!   HRV, energy expenditure and sensor payload decoding
//! - **Core** (`omphalos-core`): error types and physiological constants
//! - **Storage**: persisted coefficient records and parallel batch decoding
//! - **Duration** and **Units**: display formatting for meters and logs
//!
//! ## Example Usage
//!
//! ```rust
//! use omphalos::storage::CompressedSeries;
//! use omphalos::wavelet::KeepPolicy;
//! use omphalos::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let rr = [812.0, 798.0, 830.0, 845.0, 820.0, 801.0, 799.0, 810.0];
//!     let series = CompressedSeries::compress(&rr, KeepPolicy::Fixed(rr.len()))?;
//!     let restored = series.decompress();
//!     assert_eq!(restored.len(), rr.len());
//!
//!     let bpm = omphalos::heart_rate_sequence(&rr)?;
//!     println!("{} seconds of heart rate", bpm.len());
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Compact duration formatting and parsing
pub mod duration;

/// Sample input parsing for command-line tools
pub mod input;

/// Structured logging setup
pub mod logging;

/// Persisted coefficient records
pub mod storage;

/// Display units for meters
pub mod units;

pub use omphalos_core::{constants, errors};
pub use omphalos_signals::{
    energy, heart_rate, hrv, measurement, motion, physiology, stats, wavelet,
};

pub use duration::{format_duration, parse_duration};
pub use omphalos_signals::{
    cumsum, cumulative_energy_joules, decode, default_keep, diff, encode, encode_default,
    heart_rate_sequence, parse_heart_rate_measurement, rmssd, sdrr, welford_stats,
    EnergyProfile, HeartRateMeasurement, HrvSummary, KeepPolicy, RegressionModel, Sex,
    StatisticsSummary,
};
pub use storage::CompressedSeries;
