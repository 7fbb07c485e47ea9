// ABOUTME: Cumulative metabolic energy estimation from a 1 Hz heart-rate sequence
// ABOUTME: Keytel (2005) regressions selected by sex and VO2max availability

//! Energy expenditure
//!
//! The Keytel regression yields kJ/min for each heart-rate sample. Converting
//! `[kJ/min] / 60 [s/min] * 1000 [J/kJ]` gives J/s; samples are spaced one
//! second apart, so the running sum is cumulative energy in joules.

use crate::stats::cumsum;
use omphalos_core::constants::energy::{
    male_with_vo2, male_without_vo2, other_with_vo2, other_without_vo2, JOULES_PER_KILOJOULE,
    SECONDS_PER_MINUTE,
};
use omphalos_core::errors::ComputationError;
use serde::{Deserialize, Serialize};

/// Regression coefficient set, chosen by sex and VO2max availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressionModel {
    /// Male subject with a measured VO2max
    MaleWithVo2,
    /// Female or unspecified subject with a measured VO2max
    OtherWithVo2,
    /// Male subject without VO2max
    MaleWithoutVo2,
    /// Female or unspecified subject without VO2max
    OtherWithoutVo2,
}

impl RegressionModel {
    /// Select the model for a subject
    ///
    /// A VO2max that is absent, zero, negative or non-finite counts as unknown.
    #[must_use]
    pub fn select(is_male: bool, vo2max: Option<f64>) -> Self {
        match (is_male, usable_vo2max(vo2max).is_some()) {
            (true, true) => Self::MaleWithVo2,
            (false, true) => Self::OtherWithVo2,
            (true, false) => Self::MaleWithoutVo2,
            (false, false) => Self::OtherWithoutVo2,
        }
    }

    /// Heart-rate coefficient in kJ/min per bpm
    #[must_use]
    pub const fn slope(self) -> f64 {
        match self {
            Self::MaleWithVo2 => male_with_vo2::SLOPE,
            Self::OtherWithVo2 => other_with_vo2::SLOPE,
            Self::MaleWithoutVo2 => male_without_vo2::SLOPE,
            Self::OtherWithoutVo2 => other_without_vo2::SLOPE,
        }
    }

    /// Subject-dependent intercept in kJ/min
    ///
    /// `vo2max` is only read by the two VO2max models.
    #[must_use]
    pub fn intercept(self, age_years: f64, weight_kg: f64, vo2max: f64) -> f64 {
        match self {
            Self::MaleWithVo2 => {
                male_with_vo2::INTERCEPT
                    + male_with_vo2::WEIGHT * weight_kg
                    + male_with_vo2::VO2MAX * vo2max
                    + male_with_vo2::AGE * age_years
            }
            Self::OtherWithVo2 => {
                other_with_vo2::INTERCEPT
                    + other_with_vo2::WEIGHT * weight_kg
                    + other_with_vo2::VO2MAX * vo2max
                    + other_with_vo2::AGE * age_years
            }
            Self::MaleWithoutVo2 => {
                male_without_vo2::INTERCEPT
                    + male_without_vo2::WEIGHT * weight_kg
                    + male_without_vo2::AGE * age_years
            }
            Self::OtherWithoutVo2 => {
                other_without_vo2::INTERCEPT
                    + other_without_vo2::WEIGHT * weight_kg
                    + other_without_vo2::AGE * age_years
            }
        }
    }

    /// Model name for logging and debugging
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MaleWithVo2 => "male_with_vo2",
            Self::OtherWithVo2 => "other_with_vo2",
            Self::MaleWithoutVo2 => "male_without_vo2",
            Self::OtherWithoutVo2 => "other_without_vo2",
        }
    }
}

fn usable_vo2max(vo2max: Option<f64>) -> Option<f64> {
    vo2max.filter(|v| v.is_finite() && *v > 0.0)
}

/// Subject parameters fixed at the time an energy profile is produced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyProfile {
    /// Age in years
    pub age_years: f64,
    /// Whether the male regressions apply
    pub is_male: bool,
    /// Measured VO2max in mL/(kg·min), if known
    pub vo2max: Option<f64>,
    /// Body weight in kilograms
    pub weight_kg: f64,
}

impl EnergyProfile {
    /// Create a profile after validating the scalar parameters
    ///
    /// # Errors
    ///
    /// Returns `ComputationError::InvalidParameter` if age or weight is
    /// non-finite or negative.
    pub fn new(
        age_years: f64,
        is_male: bool,
        vo2max: Option<f64>,
        weight_kg: f64,
    ) -> Result<Self, ComputationError> {
        if !age_years.is_finite() || age_years < 0.0 {
            return Err(ComputationError::InvalidParameter {
                name: "age_years",
                reason: "must be a finite, non-negative number",
            });
        }
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(ComputationError::InvalidParameter {
                name: "weight_kg",
                reason: "must be a finite, non-negative number",
            });
        }
        Ok(Self {
            age_years,
            is_male,
            vo2max,
            weight_kg,
        })
    }

    /// Regression model for this subject
    #[must_use]
    pub fn model(&self) -> RegressionModel {
        RegressionModel::select(self.is_male, self.vo2max)
    }

    /// Instantaneous energy rate in kJ/min at `heart_rate_bpm`
    #[must_use]
    pub fn kilojoules_per_minute(&self, heart_rate_bpm: f64) -> f64 {
        let model = self.model();
        let intercept = model.intercept(
            self.age_years,
            self.weight_kg,
            usable_vo2max(self.vo2max).unwrap_or(0.0),
        );
        heart_rate_bpm.mul_add(model.slope(), intercept)
    }

    /// Heart rate at which the regression predicts zero expenditure
    ///
    /// Above this rate the cumulative energy strictly increases.
    #[must_use]
    pub fn zero_crossing_bpm(&self) -> f64 {
        let model = self.model();
        let intercept = model.intercept(
            self.age_years,
            self.weight_kg,
            usable_vo2max(self.vo2max).unwrap_or(0.0),
        );
        -intercept / model.slope()
    }

    /// Cumulative joules, one value per heart-rate sample
    ///
    /// # Errors
    ///
    /// Returns `ComputationError::NonFinite` if any heart-rate sample is NaN or infinite.
    pub fn cumulative_joules(&self, heart_rate_bpm: &[f64]) -> Result<Vec<f64>, ComputationError> {
        ComputationError::check_finite(heart_rate_bpm)?;
        let watts: Vec<f64> = heart_rate_bpm
            .iter()
            .map(|&hr| self.kilojoules_per_minute(hr) * JOULES_PER_KILOJOULE / SECONDS_PER_MINUTE)
            .collect();
        Ok(cumsum(&watts).split_off(1))
    }
}

/// Cumulative metabolic energy in joules for a 1 Hz heart-rate sequence
///
/// The output has the same length as `heart_rate_bpm`.
///
/// # Errors
///
/// Returns `ComputationError` if age or weight is invalid or any sample is non-finite.
pub fn cumulative_energy_joules(
    heart_rate_bpm: &[f64],
    age_years: f64,
    is_male: bool,
    vo2max: Option<f64>,
    weight_kg: f64,
) -> Result<Vec<f64>, ComputationError> {
    EnergyProfile::new(age_years, is_male, vo2max, weight_kg)?.cumulative_joules(heart_rate_bpm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_selection_covers_all_branches() {
        assert_eq!(
            RegressionModel::select(true, Some(45.0)),
            RegressionModel::MaleWithVo2
        );
        assert_eq!(
            RegressionModel::select(false, Some(45.0)),
            RegressionModel::OtherWithVo2
        );
        assert_eq!(
            RegressionModel::select(true, None),
            RegressionModel::MaleWithoutVo2
        );
        assert_eq!(
            RegressionModel::select(false, Some(0.0)),
            RegressionModel::OtherWithoutVo2
        );
    }

    #[test]
    fn test_each_model_coefficients() {
        let age = 30.0;
        let weight = 70.0;
        let vo2 = 50.0;
        let expected = [
            (RegressionModel::MaleWithVo2, 0.6344, -95.7735 + 0.3942 * 70.0 + 0.4044 * 50.0 + 0.2713 * 30.0),
            (RegressionModel::OtherWithVo2, 0.4498, -59.3954 + 0.1032 * 70.0 + 0.3802 * 50.0 + 0.2735 * 30.0),
            (RegressionModel::MaleWithoutVo2, 0.6309, -55.0969 + 0.1988 * 70.0 + 0.2017 * 30.0),
            (RegressionModel::OtherWithoutVo2, 0.4472, -20.4022 - 0.1263 * 70.0 + 0.0740 * 30.0),
        ];
        for (model, slope, intercept) in expected {
            assert!((model.slope() - slope).abs() < 1e-12, "{}", model.name());
            assert!(
                (model.intercept(age, weight, vo2) - intercept).abs() < 1e-9,
                "{}",
                model.name()
            );
        }
    }

    #[test]
    fn test_length_matches_input() {
        let joules = cumulative_energy_joules(&[120.0, 130.0, 140.0], 35.0, true, None, 80.0).unwrap();
        assert_eq!(joules.len(), 3);
        assert!(cumulative_energy_joules(&[], 35.0, true, None, 80.0).unwrap().is_empty());
    }

    #[test]
    fn test_first_value_is_one_second_of_energy() {
        let profile = EnergyProfile::new(35.0, true, None, 80.0).unwrap();
        let joules = profile.cumulative_joules(&[150.0]).unwrap();
        let expected = profile.kilojoules_per_minute(150.0) * 1000.0 / 60.0;
        assert!((joules[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_above_zero_crossing() {
        let profile = EnergyProfile::new(40.0, false, Some(38.0), 62.0).unwrap();
        let floor = profile.zero_crossing_bpm();
        let hr: Vec<f64> = (0..120_i32).map(|i| floor + 1.0 + f64::from(i % 40)).collect();
        let joules = profile.cumulative_joules(&hr).unwrap();
        assert!(joules.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(EnergyProfile::new(f64::NAN, true, None, 70.0).is_err());
        assert!(EnergyProfile::new(30.0, true, None, -1.0).is_err());
        assert!(cumulative_energy_joules(&[f64::NAN], 30.0, true, None, 70.0).is_err());
    }
}
