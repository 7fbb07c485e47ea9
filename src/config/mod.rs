// ABOUTME: Configuration module for codec defaults and the default energy subject
// ABOUTME: All settings come from environment variables with documented fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors
//! Configuration module for Omphalos
//!
//! - **Codec**: how many wavelet coefficients persisted series keep
//! - **Subject**: age, sex, weight and VO2max used when a caller supplies none

/// Environment variable loading
pub mod environment;

pub use environment::{env_keys, CodecConfig, OmphalosConfig, SubjectConfig};
