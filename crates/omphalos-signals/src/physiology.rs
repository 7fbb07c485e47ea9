// ABOUTME: Scalar physiological estimators used to parameterize energy expenditure
// ABOUTME: Age-predicted maximum heart rate and two VO2max field estimates

use omphalos_core::constants::heart_rate::{max_hr, vo2max};
use omphalos_core::errors::{AppError, ComputationError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sex recorded on an account for heart-rate calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

impl Sex {
    /// Whether the male regressions apply
    #[must_use]
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }
}

impl FromStr for Sex {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            "o" | "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!(
                "Unknown sex: '{other}'. Valid options: m, f, o"
            ))),
        }
    }
}

/// Age-predicted maximum heart rate, averaged over several published fits
///
/// Fox, Tanaka and Gellish are always included; the sex-specific model is added
/// when the sex is male or female.
#[must_use]
pub fn max_heart_rate_bpm(age_years: f64, sex: Option<Sex>) -> f64 {
    let mut models = vec![
        max_hr::FOX_BASE - age_years,
        max_hr::TANAKA_AGE.mul_add(-age_years, max_hr::TANAKA_BASE),
        max_hr::GELLISH_AGE.mul_add(-age_years, max_hr::GELLISH_BASE),
    ];
    match sex {
        Some(Sex::Male) => models.push(max_hr::MALE_AGE.mul_add(-age_years, max_hr::MALE_BASE)),
        Some(Sex::Female) => {
            models.push(max_hr::FEMALE_AGE.mul_add(-age_years, max_hr::FEMALE_BASE));
        }
        Some(Sex::Other) | None => {}
    }
    models.iter().sum::<f64>() / models.len() as f64
}

/// VO2max in mL/(kg·min) from the ratio of maximum to resting heart rate
///
/// # Errors
///
/// Returns `ComputationError::InvalidParameter` if the resting rate is not positive.
pub fn vo2max_from_resting_heart_rate(
    resting_bpm: f64,
    max_bpm: f64,
) -> Result<f64, ComputationError> {
    if !resting_bpm.is_finite() || resting_bpm <= 0.0 {
        return Err(ComputationError::InvalidParameter {
            name: "resting_bpm",
            reason: "must be a positive heart rate",
        });
    }
    Ok(vo2max::HR_RATIO_FACTOR * max_bpm / resting_bpm)
}

/// VO2max in mL/(kg·min) from the Rockport one-mile walk test
///
/// Walk one mile, then record the elapsed time and the heart rate at the finish.
#[must_use]
pub fn vo2max_rockport(
    age_years: f64,
    is_male: bool,
    weight_kg: f64,
    walk_minutes: f64,
    walk_heart_rate_bpm: f64,
) -> f64 {
    use vo2max::rockport;
    let male = if is_male { rockport::MALE } else { 0.0 };
    rockport::INTERCEPT
        + male
        + rockport::AGE * age_years
        + rockport::WEIGHT * weight_kg
        + rockport::WALK_TIME * walk_minutes
        + rockport::WALK_HEART_RATE * walk_heart_rate_bpm
}
