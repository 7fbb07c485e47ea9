// ABOUTME: Benchmark fixtures for generating realistic RR-interval and heart-rate sequences
// ABOUTME: Deterministic so repeated runs measure identical workloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors

//! Benchmark test fixtures for generating realistic sensor sequences.

/// Predefined sequence lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SeriesLength {
    /// A resting measurement of about four minutes
    Rest,
    /// An hour-long workout at a typical rate
    Workout,
    /// A day-long recording
    Day,
}

impl SeriesLength {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Rest => 256,
            Self::Workout => 5_000,
            Self::Day => 100_000,
        }
    }
}

/// RR intervals in milliseconds with a slow respiratory swing and jitter
#[must_use]
pub fn generate_rr_intervals(length: SeriesLength) -> Vec<f64> {
    (0..length.count())
        .map(|index| {
            let phase = index as f64 / 8.0;
            let jitter = ((index * 7919) % 41) as f64 - 20.0;
            phase.sin().mul_add(45.0, 800.0) + jitter
        })
        .collect()
}

/// A 1 Hz heart-rate sequence ramping between warm-up and threshold effort
#[must_use]
pub fn generate_heart_rate(length: SeriesLength) -> Vec<f64> {
    (0..length.count())
        .map(|index| 90.0 + ((index * 31) % 900) as f64 / 10.0)
        .collect()
}
