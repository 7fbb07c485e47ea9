// ABOUTME: Decodes the GATT Heart Rate Measurement characteristic into bpm and RR intervals
// ABOUTME: Handles u8/u16 rate formats, sensor contact, energy expended and RR lists

//! Heart Rate Measurement characteristic (0x2A37)
//!
//! Layout: one flags byte followed by the heart-rate value and optional fields.
//!
//! | Bit | Meaning |
//! |-----|---------|
//! | 0 | Rate is `u16` little-endian (otherwise `u8`) |
//! | 1 | Sensor contact detected |
//! | 2 | Sensor contact bit is supported |
//! | 3 | Energy expended (`u16`, kJ) present |
//! | 4 | One or more RR intervals (`u16`, 1/1024 s) follow |

use omphalos_core::constants::heart_rate::{GATT_RR_TICKS_PER_SECOND, MS_PER_SECOND};
use omphalos_core::errors::CodecError;
use serde::{Deserialize, Serialize};

const FLAG_RATE_U16: u8 = 0x01;
const FLAG_CONTACT_DETECTED: u8 = 0x02;
const FLAG_CONTACT_SUPPORTED: u8 = 0x04;
const FLAG_ENERGY_PRESENT: u8 = 0x08;
const FLAG_RR_PRESENT: u8 = 0x10;

/// One decoded heart rate measurement notification
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeartRateMeasurement {
    /// Heart rate in beats per minute
    pub heart_rate_bpm: u16,
    /// Sensor contact state, when the sensor reports it
    pub sensor_contact: Option<bool>,
    /// Cumulative energy expended in kJ, when present
    pub energy_expended_kj: Option<u16>,
    /// RR intervals in 1/1024 s ticks
    pub rr_ticks: Vec<u16>,
}

impl HeartRateMeasurement {
    /// RR intervals converted to milliseconds
    #[must_use]
    pub fn rr_intervals_ms(&self) -> Vec<f64> {
        self.rr_ticks
            .iter()
            .map(|&ticks| f64::from(ticks) * MS_PER_SECOND / GATT_RR_TICKS_PER_SECOND)
            .collect()
    }
}

/// Decode a raw characteristic value
///
/// A trailing odd byte in the RR list is ignored.
///
/// # Errors
///
/// Returns `CodecError::TruncatedPayload` if the payload is empty or too short
/// for the heart-rate field its flags declare.
pub fn parse_heart_rate_measurement(data: &[u8]) -> Result<HeartRateMeasurement, CodecError> {
    let truncated = || CodecError::TruncatedPayload { len: data.len() };
    let (&flags, rest) = data.split_first().ok_or_else(truncated)?;

    let (heart_rate_bpm, mut rest) = if flags & FLAG_RATE_U16 != 0 {
        match rest {
            [lo, hi, tail @ ..] => (u16::from_le_bytes([*lo, *hi]), tail),
            _ => return Err(truncated()),
        }
    } else {
        match rest {
            [value, tail @ ..] => (u16::from(*value), tail),
            _ => return Err(truncated()),
        }
    };

    let sensor_contact =
        (flags & FLAG_CONTACT_SUPPORTED != 0).then_some(flags & FLAG_CONTACT_DETECTED != 0);

    let mut energy_expended_kj = None;
    if flags & FLAG_ENERGY_PRESENT != 0 {
        if let [lo, hi, tail @ ..] = rest {
            energy_expended_kj = Some(u16::from_le_bytes([*lo, *hi]));
            rest = tail;
        }
    }

    let rr_ticks = if flags & FLAG_RR_PRESENT != 0 {
        rest.chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    } else {
        Vec::new()
    };

    Ok(HeartRateMeasurement {
        heart_rate_bpm,
        sensor_contact,
        energy_expended_kj,
        rr_ticks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_rate_only() {
        let m = parse_heart_rate_measurement(&[0x00, 72]).unwrap();
        assert_eq!(m.heart_rate_bpm, 72);
        assert_eq!(m.sensor_contact, None);
        assert!(m.rr_ticks.is_empty());
    }

    #[test]
    fn test_u16_rate_with_contact() {
        let m = parse_heart_rate_measurement(&[0x07, 0x2C, 0x01]).unwrap();
        assert_eq!(m.heart_rate_bpm, 300);
        assert_eq!(m.sensor_contact, Some(true));
    }

    #[test]
    fn test_energy_and_rr_intervals() {
        // flags: energy + rr, hr 60, energy 0x0102, rr 1024 and 512 ticks, one stray byte
        let data = [0x18, 60, 0x02, 0x01, 0x00, 0x04, 0x00, 0x02, 0xFF];
        let m = parse_heart_rate_measurement(&data).unwrap();
        assert_eq!(m.heart_rate_bpm, 60);
        assert_eq!(m.energy_expended_kj, Some(0x0102));
        assert_eq!(m.rr_ticks, vec![1024, 512]);
        assert_eq!(m.rr_intervals_ms(), vec![1000.0, 500.0]);
    }

    #[test]
    fn test_truncated_payloads() {
        assert_eq!(
            parse_heart_rate_measurement(&[]),
            Err(CodecError::TruncatedPayload { len: 0 })
        );
        assert!(parse_heart_rate_measurement(&[0x01, 0x3C]).is_err());
        assert!(parse_heart_rate_measurement(&[0x00]).is_err());
    }
}
