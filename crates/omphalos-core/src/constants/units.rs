// ABOUTME: Display unit conversion factors for vitals and workout meters
// ABOUTME: Factors multiply the canonical stored value to obtain the displayed value

/// Centimeters to inches
pub const INCHES_PER_CM: f64 = 0.3937;
/// Kilograms to pounds
pub const POUNDS_PER_KG: f64 = 2.20462;
/// Kilograms to stone
pub const STONE_PER_KG: f64 = 0.15747;
/// Beats per minute to hertz
pub const HZ_PER_BPM: f64 = 1.0 / 60.0;
/// Meters to kilometers
pub const KM_PER_M: f64 = 0.001;
/// Meters to miles
pub const MILES_PER_M: f64 = 0.000_621_371;
/// Hertz to revolutions per minute
pub const RPM_PER_HZ: f64 = 60.0;
/// Watts to mechanical horsepower
pub const HP_PER_WATT: f64 = 0.001_341_02;
/// Celsius to Fahrenheit scale factor
pub const FAHRENHEIT_PER_CELSIUS: f64 = 1.8;
/// Fahrenheit offset at 0 °C
pub const FAHRENHEIT_OFFSET: f64 = 32.0;
