// ABOUTME: Constants for physiological calculations and display unit conversion
// ABOUTME: Organized by domain so each formula's coefficients live beside their references

//! Physiological constants based on published regression models
//!
//! Values are reproduced verbatim from the cited studies. Changing any of them
//! changes persisted analysis results, so they are kept as named constants
//! rather than inline literals.

/// Keytel et al. (2005) energy-expenditure regression coefficients
pub mod energy;

/// Heart-rate conversion factors and age-predicted maximum models
pub mod heart_rate;

/// Display unit conversion factors for vitals and workout meters
pub mod units;
