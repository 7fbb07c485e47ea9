// ABOUTME: Heart-rate conversion factors and age-predicted maximum heart rate models
// ABOUTME: Includes VO2max estimation coefficients (heart-rate ratio and Rockport walk test)

/// Milliseconds per minute; `60000 / rr_ms` gives beats per minute
pub const MS_PER_MINUTE: f64 = 60_000.0;

/// Milliseconds per second
pub const MS_PER_SECOND: f64 = 1000.0;

/// Resolution of RR intervals in the GATT heart rate measurement characteristic (1/1024 s)
pub const GATT_RR_TICKS_PER_SECOND: f64 = 1024.0;

/// Age-predicted maximum heart rate regressions
///
/// Reference: <https://www.trailrunnerworld.com/maximum-heart-rate-calculator/>
pub mod max_hr {
    /// Fox: `220 - age`
    pub const FOX_BASE: f64 = 220.0;
    /// Tanaka: `217 - 0.85 * age` (base)
    pub const TANAKA_BASE: f64 = 217.0;
    /// Tanaka age coefficient
    pub const TANAKA_AGE: f64 = 0.85;
    /// Gellish: `206.9 - 0.67 * age` (base)
    pub const GELLISH_BASE: f64 = 206.9;
    /// Gellish age coefficient
    pub const GELLISH_AGE: f64 = 0.67;
    /// Male-specific model: `202 - 0.55 * age` (base)
    pub const MALE_BASE: f64 = 202.0;
    /// Male-specific age coefficient
    pub const MALE_AGE: f64 = 0.55;
    /// Female-specific model: `216 - 1.09 * age` (base)
    pub const FEMALE_BASE: f64 = 216.0;
    /// Female-specific age coefficient
    pub const FEMALE_AGE: f64 = 1.09;
}

/// VO2max estimation coefficients
pub mod vo2max {
    /// Heart-rate ratio method: `15.3 * max_hr / resting_hr`
    ///
    /// Reference: <https://www.trailrunnerworld.com/vo2-max-calculator/>
    pub const HR_RATIO_FACTOR: f64 = 15.3;

    /// Rockport one-mile walk test
    ///
    /// Reference: <http://www.shapesense.com/fitness-exercise/calculators/vo2max-calculator.shtml>
    pub mod rockport {
        /// Constant term
        pub const INTERCEPT: f64 = 132.8530;
        /// Added for male subjects
        pub const MALE: f64 = 6.3150;
        /// Per year of age
        pub const AGE: f64 = -0.3877;
        /// Per kilogram of body weight
        pub const WEIGHT: f64 = -0.1695;
        /// Per minute of walk time
        pub const WALK_TIME: f64 = -3.2649;
        /// Per bpm of heart rate at the end of the walk
        pub const WALK_HEART_RATE: f64 = -0.1565;
    }
}
