// ABOUTME: Core types and constants for the Omphalos physiological signal library
// ABOUTME: Foundation crate with error handling and published regression constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors

#![deny(unsafe_code)]

//! # Omphalos Core
//!
//! Foundation crate providing shared error types and constants for the Omphalos
//! physiological signal library. It changes rarely so the algorithm crate and the
//! facade can compile incrementally on top of it.
//!
//! ## Modules
//!
//! - **errors**: `ComputationError`, `DurationParseError`, `CodecError` and the unifying `AppError`
//! - **constants**: Regression coefficients, heart-rate conversion factors and display unit factors

/// Unified error handling with standard error codes
pub mod errors;

/// Physiological and unit-conversion constants organized by domain
pub mod constants;
