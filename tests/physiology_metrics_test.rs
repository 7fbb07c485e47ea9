// ABOUTME: Integration tests for statistics, heart-rate reconstruction, HRV and energy estimation
// ABOUTME: Exercises the metric pipeline from RR intervals to cumulative joules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use omphalos::energy::{cumulative_energy_joules, EnergyProfile, RegressionModel};
use omphalos::errors::ComputationError;
use omphalos::heart_rate::heart_rate_sequence;
use omphalos::hrv::{rmssd, sdrr, HrvSummary};
use omphalos::physiology::{max_heart_rate_bpm, vo2max_from_resting_heart_rate, Sex};
use omphalos::stats::{cumsum, diff, welford_stats, StatisticsSummary};

#[test]
fn test_welford_constant_sequence() {
    assert_eq!(
        welford_stats(&[5.0, 5.0, 5.0, 5.0]),
        StatisticsSummary {
            count: 4,
            mean: 5.0,
            stdev: 0.0,
            rms: 5.0,
        }
    );
}

#[test]
fn test_diff_and_cumsum_shapes() {
    assert_eq!(diff(&[3.0, 5.0, 4.0]), vec![0.0, 2.0, -1.0]);
    assert_eq!(cumsum(&[3.0, 5.0, 4.0]), vec![0.0, 3.0, 8.0, 12.0]);
    assert!(diff(&[]).is_empty());
    assert_eq!(cumsum(&[]), vec![0.0]);
}

#[test]
fn test_hrv_reference_values() {
    assert!(sdrr(&[800.0, 800.0, 800.0]).unwrap().abs() < 1e-12);
    let value = rmssd(&[800.0, 820.0, 800.0]).unwrap();
    assert!((value - 16.329_931_618_554_52).abs() < 1e-9);
}

#[test]
fn test_hrv_short_recordings_are_zero() {
    assert!(sdrr(&[]).unwrap().abs() < f64::EPSILON);
    assert!(rmssd(&[812.0]).unwrap().abs() < f64::EPSILON);
    let summary = HrvSummary::from_intervals(&[812.0]).unwrap();
    assert_eq!(summary.count, 1);
    assert!(summary.rmssd.abs() < f64::EPSILON);
}

#[test]
fn test_steady_beats_reconstruct_flat_rate() {
    let hr = heart_rate_sequence(&[1000.0, 1000.0, 1000.0]).unwrap();
    assert!(!hr.is_empty());
    assert!(hr.iter().all(|v| (v - 60.0).abs() < 1e-9));
}

#[test]
fn test_heart_rate_covers_every_second() {
    let rr = vec![750.0; 40];
    let hr = heart_rate_sequence(&rr).unwrap();
    assert_eq!(hr.len(), 31);
    assert!(hr.iter().all(|v| (v - 80.0).abs() < 1e-9));
}

#[test]
fn test_heart_rate_errors() {
    assert!(matches!(
        heart_rate_sequence(&[1000.0, -1.0, 1000.0]),
        Err(ComputationError::NegativeInterval { index: 1, .. })
    ));
    assert_eq!(
        heart_rate_sequence(&[0.0, 0.0, 0.0]),
        Err(ComputationError::NoPositiveIntervals)
    );
}

#[test]
fn test_regression_model_selection() {
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
fn test_energy_monotonic_above_zero_crossing() {
    for (is_male, vo2max) in [(true, None), (false, None), (true, Some(50.0)), (false, Some(38.0))] {
        let profile = EnergyProfile::new(35.0, is_male, vo2max, 72.0).unwrap();
        let floor = profile.zero_crossing_bpm();
        let hr: Vec<f64> = (0..120_i32).map(|i| floor + 1.0 + f64::from(i % 50)).collect();
        let joules = profile.cumulative_joules(&hr).unwrap();
        assert_eq!(joules.len(), hr.len());
        assert!(joules[0] > 0.0);
        assert!(joules.windows(2).all(|w| w[1] > w[0]));
    }
}

#[test]
fn test_energy_from_reconstructed_heart_rate() {
    let hr = heart_rate_sequence(&vec![500.0; 130]).unwrap();
    let joules = cumulative_energy_joules(&hr, 30.0, true, None, 80.0).unwrap();
    assert_eq!(joules.len(), hr.len());
    assert!(joules.last().copied().unwrap() > 0.0);
    assert!(cumulative_energy_joules(&[], 30.0, true, None, 80.0)
        .unwrap()
        .is_empty());
}

#[test]
fn test_energy_rejects_invalid_subject() {
    assert!(cumulative_energy_joules(&[120.0], f64::NAN, true, None, 80.0).is_err());
    assert!(cumulative_energy_joules(&[120.0], 30.0, true, None, -2.0).is_err());
}

#[test]
fn test_max_heart_rate_and_vo2max_estimates() {
    let unknown = max_heart_rate_bpm(40.0, None);
    assert!(unknown > 170.0 && unknown < 190.0);
    assert!(max_heart_rate_bpm(40.0, Some(Sex::Male)).is_finite());
    let vo2 = vo2max_from_resting_heart_rate(60.0, 180.0).unwrap();
    assert!((vo2 - 45.9).abs() < 1e-9);
    assert!(vo2max_from_resting_heart_rate(0.0, 180.0).is_err());
}
