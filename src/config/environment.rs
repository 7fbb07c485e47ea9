// ABOUTME: Environment configuration parsing for codec policy and subject defaults
// ABOUTME: Unparseable values are logged and replaced by defaults rather than rejected

//! Environment-based configuration

use omphalos_core::errors::ComputationError;
use omphalos_signals::energy::EnergyProfile;
use omphalos_signals::physiology::Sex;
use omphalos_signals::wavelet::{KeepPolicy, DEFAULT_KEEP_POLICY};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::{info, warn};

/// Environment variable names
pub mod env_keys {
    /// Wavelet keep policy: `sqrt`, an integer count, or `drop:<levels>`
    pub const WAVELET_KEEP: &str = "OMPHALOS_WAVELET_KEEP";
    /// Subject age in years
    pub const SUBJECT_AGE: &str = "OMPHALOS_SUBJECT_AGE";
    /// Subject sex: `m`, `f` or `o`
    pub const SUBJECT_SEX: &str = "OMPHALOS_SUBJECT_SEX";
    /// Subject weight in kilograms
    pub const SUBJECT_WEIGHT_KG: &str = "OMPHALOS_SUBJECT_WEIGHT_KG";
    /// Subject VO2max in mL/(kg·min)
    pub const SUBJECT_VO2MAX: &str = "OMPHALOS_SUBJECT_VO2MAX";
}

/// Default subject age when none is configured
pub const DEFAULT_SUBJECT_AGE: f64 = 30.0;
/// Default subject weight when none is configured
pub const DEFAULT_SUBJECT_WEIGHT_KG: f64 = 70.0;

/// Wavelet codec settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Coefficients retained when persisting a series
    pub keep_policy: KeepPolicy,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            keep_policy: DEFAULT_KEEP_POLICY,
        }
    }
}

impl CodecConfig {
    /// Load codec settings from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            keep_policy: parse_env_or(env_keys::WAVELET_KEEP, DEFAULT_KEEP_POLICY),
        }
    }
}

/// Subject used for energy estimation when the caller supplies no values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubjectConfig {
    /// Age in years
    pub age_years: f64,
    /// Sex, if recorded
    pub sex: Option<Sex>,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Measured VO2max, if known
    pub vo2max: Option<f64>,
}

impl Default for SubjectConfig {
    fn default() -> Self {
        Self {
            age_years: DEFAULT_SUBJECT_AGE,
            sex: None,
            weight_kg: DEFAULT_SUBJECT_WEIGHT_KG,
            vo2max: None,
        }
    }
}

impl SubjectConfig {
    /// Load subject defaults from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            age_years: parse_env_or(env_keys::SUBJECT_AGE, DEFAULT_SUBJECT_AGE),
            sex: parse_env_optional(env_keys::SUBJECT_SEX),
            weight_kg: parse_env_or(env_keys::SUBJECT_WEIGHT_KG, DEFAULT_SUBJECT_WEIGHT_KG),
            vo2max: parse_env_optional(env_keys::SUBJECT_VO2MAX),
        }
    }

    /// Energy profile for this subject
    ///
    /// # Errors
    ///
    /// Returns `ComputationError::InvalidParameter` if age or weight is out of range.
    pub fn energy_profile(&self) -> Result<EnergyProfile, ComputationError> {
        EnergyProfile::new(
            self.age_years,
            self.sex.is_some_and(Sex::is_male),
            self.vo2max,
            self.weight_kg,
        )
    }
}

/// Complete library configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OmphalosConfig {
    /// Codec settings
    pub codec: CodecConfig,
    /// Default subject
    pub subject: SubjectConfig,
}

impl OmphalosConfig {
    /// Load all settings from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            codec: CodecConfig::from_env(),
            subject: SubjectConfig::from_env(),
        };
        info!(
            keep_policy = %config.codec.keep_policy,
            subject_age = config.subject.age_years,
            "Loaded configuration from environment"
        );
        config
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse `key` into `T`, warning and falling back to `default` when unparseable
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let raw = env_var_or(key, "");
    if raw.trim().is_empty() {
        return default;
    }
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value '{raw}': {e}; using {default}");
        default
    })
}

/// Parse `key` into `Some(T)`; unset, empty or invalid values give `None`
fn parse_env_optional<T>(key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = env_var_or(key, "");
    if raw.trim().is_empty() {
        return None;
    }
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Invalid {key} value '{raw}': {e}; ignoring");
            None
        }
    }
}
