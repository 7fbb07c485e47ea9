// ABOUTME: Keytel (2005) regression coefficients for heart-rate based energy expenditure
// ABOUTME: Four coefficient sets split by sex and VO2max availability

//! Energy-expenditure regression coefficients
//!
//! References:
//! - Keytel, L.R. et al. (2005). Prediction of energy expenditure from heart rate
//!   monitoring during submaximal exercise. *J Sports Sci*, 23(3), 289-297.
//!   <https://ncbi.nlm.nih.gov/pubmed/15966347>
//! - Rennie, K.L. et al. (2001). <https://ncbi.nlm.nih.gov/pubmed/11404659>
//! - Hiilloskorpi, H. et al. (1999). Care Sci Sports
//!
//! Each model yields kJ/min as `hr * SLOPE + INTERCEPT + WEIGHT * kg + VO2MAX * vo2 + AGE * years`.

/// Male subject with a measured VO2max
pub mod male_with_vo2 {
    /// Heart-rate coefficient
    pub const SLOPE: f64 = 0.6344;
    /// Constant term
    pub const INTERCEPT: f64 = -95.7735;
    /// Body weight coefficient (per kg)
    pub const WEIGHT: f64 = 0.3942;
    /// VO2max coefficient (per mL/kg/min)
    pub const VO2MAX: f64 = 0.4044;
    /// Age coefficient (per year)
    pub const AGE: f64 = 0.2713;
}

/// Female or unspecified sex with a measured VO2max
pub mod other_with_vo2 {
    /// Heart-rate coefficient
    pub const SLOPE: f64 = 0.4498;
    /// Constant term
    pub const INTERCEPT: f64 = -59.3954;
    /// Body weight coefficient (per kg)
    pub const WEIGHT: f64 = 0.1032;
    /// VO2max coefficient (per mL/kg/min)
    pub const VO2MAX: f64 = 0.3802;
    /// Age coefficient (per year)
    pub const AGE: f64 = 0.2735;
}

/// Male subject without VO2max
pub mod male_without_vo2 {
    /// Heart-rate coefficient
    pub const SLOPE: f64 = 0.6309;
    /// Constant term
    pub const INTERCEPT: f64 = -55.0969;
    /// Body weight coefficient (per kg)
    pub const WEIGHT: f64 = 0.1988;
    /// Age coefficient (per year)
    pub const AGE: f64 = 0.2017;
}

/// Female or unspecified sex without VO2max
pub mod other_without_vo2 {
    /// Heart-rate coefficient
    pub const SLOPE: f64 = 0.4472;
    /// Constant term
    pub const INTERCEPT: f64 = -20.4022;
    /// Body weight coefficient (per kg)
    pub const WEIGHT: f64 = -0.1263;
    /// Age coefficient (per year)
    pub const AGE: f64 = 0.0740;
}

/// Kilojoules to joules
pub const JOULES_PER_KILOJOULE: f64 = 1000.0;

/// Seconds per minute, converts kJ/min to kJ/s
pub const SECONDS_PER_MINUTE: f64 = 60.0;
