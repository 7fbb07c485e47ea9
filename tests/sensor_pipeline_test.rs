// ABOUTME: Integration tests from raw sensor payloads to derived metrics
// ABOUTME: Heart rate measurement packets feed reconstruction; accelerometer readings feed step edges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use omphalos::heart_rate::heart_rate_sequence;
use omphalos::hrv::HrvSummary;
use omphalos::measurement::parse_heart_rate_measurement;
use omphalos::motion::{log_magnitude, ReadingWindow, READING_WINDOW_CAPACITY};

#[test]
fn test_measurement_packets_to_heart_rate() {
    // u8 rate with two RR values of 1024 ticks (one second each)
    let packet = [0x10, 60, 0x00, 0x04, 0x00, 0x04];
    let mut rr = Vec::new();
    for _ in 0..3 {
        let measurement = parse_heart_rate_measurement(&packet).unwrap();
        assert_eq!(measurement.heart_rate_bpm, 60);
        assert_eq!(measurement.sensor_contact, None);
        rr.extend(measurement.rr_intervals_ms());
    }
    assert_eq!(rr, vec![1000.0; 6]);

    let hr = heart_rate_sequence(&rr).unwrap();
    assert_eq!(hr.len(), 7);
    assert!(hr.iter().all(|v| (v - 60.0).abs() < 1e-9));

    let summary = HrvSummary::from_intervals(&rr).unwrap();
    assert!((summary.mean_rr_ms - 1000.0).abs() < 1e-9);
    assert!(summary.sdrr.abs() < 1e-9);
}

#[test]
fn test_truncated_packet_rejected() {
    assert!(parse_heart_rate_measurement(&[0x10]).is_err());
    assert!(parse_heart_rate_measurement(&[]).is_err());
}

#[test]
fn test_reading_window_is_bounded() {
    let mut window = ReadingWindow::new();
    for i in 0..(READING_WINDOW_CAPACITY + 25) {
        let z = if i % 10 == 0 { 20.0 } else { 9.8 };
        window.push(log_magnitude(0.1, 0.2, z));
    }
    assert_eq!(window.len(), READING_WINDOW_CAPACITY);
    assert!(!window.step_edges().is_empty());
}
