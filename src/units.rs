// ABOUTME: Display unit conversions for vitals and workout meters (cm/in, kg/lb/st, °C/°F, ...)
// ABOUTME: Tagged Linear/Custom conversions plus compact numeric formatting helpers

//! Display units
//!
//! Every quantity is stored in one canonical unit. A [`DisplayUnit`] pairs a
//! label with a [`UnitConversion`] describing how the canonical value maps to
//! what the user sees.

use omphalos_core::constants::units::{
    FAHRENHEIT_OFFSET, FAHRENHEIT_PER_CELSIUS, HP_PER_WATT, HZ_PER_BPM, INCHES_PER_CM, KM_PER_M,
    MILES_PER_M, POUNDS_PER_KG, RPM_PER_HZ, STONE_PER_KG,
};
use serde::{Deserialize, Serialize};

/// How a canonical value converts to a display value and back
#[derive(Debug, Clone, Copy)]
pub enum UnitConversion {
    /// The canonical unit itself
    Canonical,
    /// Display value is the canonical value multiplied by a factor
    Linear(f64),
    /// Arbitrary forward and inverse functions
    Custom {
        /// Canonical to display
        forward: fn(f64) -> f64,
        /// Display to canonical
        backward: fn(f64) -> f64,
    },
}

impl UnitConversion {
    /// Convert a stored value for display
    #[must_use]
    pub fn to_display(self, value: f64) -> f64 {
        match self {
            Self::Canonical => value,
            Self::Linear(factor) => value * factor,
            Self::Custom { forward, .. } => forward(value),
        }
    }

    /// Convert an entered value back to the canonical unit
    #[must_use]
    pub fn from_display(self, value: f64) -> f64 {
        match self {
            Self::Canonical => value,
            Self::Linear(factor) => value / factor,
            Self::Custom { backward, .. } => backward(value),
        }
    }
}

/// A labelled display unit
#[derive(Debug, Clone, Copy)]
pub struct DisplayUnit {
    /// Label shown beside the value
    pub label: &'static str,
    /// Conversion from the canonical unit
    pub conversion: UnitConversion,
}

impl DisplayUnit {
    const fn canonical(label: &'static str) -> Self {
        Self {
            label,
            conversion: UnitConversion::Canonical,
        }
    }

    const fn linear(label: &'static str, factor: f64) -> Self {
        Self {
            label,
            conversion: UnitConversion::Linear(factor),
        }
    }
}

fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius.mul_add(FAHRENHEIT_PER_CELSIUS, FAHRENHEIT_OFFSET)
}

fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) / FAHRENHEIT_PER_CELSIUS
}

const HEIGHT_UNITS: &[DisplayUnit] = &[
    DisplayUnit::linear("in", INCHES_PER_CM),
    DisplayUnit::canonical("cm"),
];
const WEIGHT_UNITS: &[DisplayUnit] = &[
    DisplayUnit::linear("lb", POUNDS_PER_KG),
    DisplayUnit::linear("st", STONE_PER_KG),
    DisplayUnit::canonical("kg"),
];
const TEMPERATURE_UNITS: &[DisplayUnit] = &[
    DisplayUnit::canonical("°C"),
    DisplayUnit {
        label: "°F",
        conversion: UnitConversion::Custom {
            forward: celsius_to_fahrenheit,
            backward: fahrenheit_to_celsius,
        },
    },
];
const PULSE_UNITS: &[DisplayUnit] = &[
    DisplayUnit::canonical("bpm"),
    DisplayUnit::linear("Hz", HZ_PER_BPM),
];
const VO2MAX_UNITS: &[DisplayUnit] = &[DisplayUnit::canonical("mL/(kg·min)")];
const DISTANCE_UNITS: &[DisplayUnit] = &[
    DisplayUnit::canonical("m"),
    DisplayUnit::linear("km", KM_PER_M),
    DisplayUnit::linear("mi", MILES_PER_M),
];
const CADENCE_UNITS: &[DisplayUnit] = &[
    DisplayUnit::canonical("Hz"),
    DisplayUnit::linear("rpm", RPM_PER_HZ),
];
const POWER_UNITS: &[DisplayUnit] = &[
    DisplayUnit::canonical("W"),
    DisplayUnit::linear("hp", HP_PER_WATT),
];
const RESISTANCE_UNITS: &[DisplayUnit] = &[
    DisplayUnit::canonical(""),
    DisplayUnit::linear("lb", 1.0),
    DisplayUnit::linear("kg", 1.0),
];

/// A measured quantity with its own set of display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Body height, stored in centimeters
    Height,
    /// Body weight, stored in kilograms
    Weight,
    /// Body temperature, stored in degrees Celsius
    Temperature,
    /// Heart rate, stored in beats per minute
    Pulse,
    /// VO2max, stored in mL/(kg·min)
    Vo2Max,
    /// Distance, stored in meters
    Distance,
    /// Cadence, stored in hertz
    Cadence,
    /// Power, stored in watts
    Power,
    /// Equipment resistance, unitless
    Resistance,
}

impl Quantity {
    /// Display units in the order a meter cycles through them
    #[must_use]
    pub const fn units(self) -> &'static [DisplayUnit] {
        match self {
            Self::Height => HEIGHT_UNITS,
            Self::Weight => WEIGHT_UNITS,
            Self::Temperature => TEMPERATURE_UNITS,
            Self::Pulse => PULSE_UNITS,
            Self::Vo2Max => VO2MAX_UNITS,
            Self::Distance => DISTANCE_UNITS,
            Self::Cadence => CADENCE_UNITS,
            Self::Power => POWER_UNITS,
            Self::Resistance => RESISTANCE_UNITS,
        }
    }

    /// The canonical (stored) unit
    #[must_use]
    pub fn canonical(self) -> DisplayUnit {
        self.units()
            .iter()
            .copied()
            .find(|u| matches!(u.conversion, UnitConversion::Canonical))
            .unwrap_or(DisplayUnit::canonical(""))
    }

    /// Look up a display unit by label, falling back to the canonical unit
    #[must_use]
    pub fn unit(self, label: &str) -> DisplayUnit {
        self.units()
            .iter()
            .copied()
            .find(|u| u.label == label)
            .unwrap_or_else(|| self.canonical())
    }

    /// The unit after `label` in cycling order
    #[must_use]
    pub fn next_unit(self, label: &str) -> DisplayUnit {
        let units = self.units();
        let next = units
            .iter()
            .position(|u| u.label == label)
            .map_or(0, |i| (i + 1) % units.len());
        units.get(next).copied().unwrap_or_else(|| self.canonical())
    }
}

/// Render a value with one decimal place
#[must_use]
pub fn round_tenths(value: f64) -> String {
    format!("{value:.1}")
}

/// Render a stored meter value in `unit`; absent or zero values render `---`
#[must_use]
pub fn format_meter(value: Option<f64>, unit: DisplayUnit) -> String {
    match value {
        Some(v) if v != 0.0 && v.is_finite() => round_tenths(unit.conversion.to_display(v)),
        _ => "---".to_owned(),
    }
}

/// Render decimal degrees as degrees, arcminutes and arcseconds, e.g. `37°54′34″`
#[must_use]
pub fn format_degrees(value: f64) -> String {
    let degrees = value.floor();
    let minutes = (60.0 * (value - degrees)).floor();
    let seconds = (3600.0 * (value - degrees - minutes / 60.0)).floor();
    format!("{degrees}°{minutes}′{seconds}″")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_round_trip() {
        let lb = Quantity::Weight.unit("lb");
        let shown = lb.conversion.to_display(80.0);
        assert!((shown - 176.3696).abs() < 1e-9);
        assert!((lb.conversion.from_display(shown) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_temperature() {
        let f = Quantity::Temperature.unit("°F");
        assert!((f.conversion.to_display(37.0) - 98.6).abs() < 1e-9);
        assert!((f.conversion.from_display(212.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_label_falls_back_to_canonical() {
        assert_eq!(Quantity::Height.unit("furlong").label, "cm");
        assert_eq!(Quantity::Cadence.canonical().label, "Hz");
    }

    #[test]
    fn test_unit_cycling_wraps() {
        assert_eq!(Quantity::Weight.next_unit("lb").label, "st");
        assert_eq!(Quantity::Weight.next_unit("kg").label, "lb");
        assert_eq!(Quantity::Vo2Max.next_unit("mL/(kg·min)").label, "mL/(kg·min)");
    }

    #[test]
    fn test_format_meter() {
        assert_eq!(format_meter(None, Quantity::Pulse.canonical()), "---");
        assert_eq!(format_meter(Some(0.0), Quantity::Pulse.canonical()), "---");
        assert_eq!(format_meter(Some(72.0), Quantity::Pulse.unit("Hz")), "1.2");
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(37.5), "37°30′0″");
        assert_eq!(format_degrees(10.0), "10°0′0″");
    }
}
