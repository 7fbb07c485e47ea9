// ABOUTME: Integration tests for persisted coefficient records
// ABOUTME: Validates binary and JSON encodings and parallel batch decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bytes::Bytes;
use omphalos::errors::{AppError, CodecError, ErrorCode};
use omphalos::storage::{
    decode_all, decode_all_bytes, CompressedSeries, HEADER_LEN, MAX_SERIES_LEN,
};
use omphalos::wavelet::KeepPolicy;

fn workout_rr() -> Vec<f64> {
    (0..120_i32)
        .map(|i| 650.0 + 30.0 * (f64::from(i) / 9.0).cos())
        .collect()
}

#[test]
fn test_record_keeps_original_length() {
    let rr = workout_rr();
    let series = CompressedSeries::compress(&rr, KeepPolicy::SqrtLength).unwrap();
    assert_eq!(series.count, 120);
    assert_eq!(series.coefficients.len(), 11);
    assert_eq!(series.decompress().len(), 120);
}

#[test]
fn test_binary_encoding_is_bit_exact() {
    let series =
        CompressedSeries::compress(&workout_rr(), KeepPolicy::DropFinestLevels(3)).unwrap();
    let bytes = series.to_bytes();
    assert_eq!(bytes.len(), HEADER_LEN + 8 * series.coefficients.len());
    let restored = CompressedSeries::from_bytes(&bytes).unwrap();
    assert_eq!(restored, series);
    assert_eq!(restored.decompress(), series.decompress());
}

#[test]
fn test_json_record_shape() {
    let series = CompressedSeries {
        coefficients: vec![2.0, -0.5],
        count: 4,
    };
    let json = series.to_json().unwrap();
    assert_eq!(json, r#"{"coefficients":[2.0,-0.5],"count":4}"#);
    assert_eq!(CompressedSeries::from_json(&json).unwrap(), series);
    let err = CompressedSeries::from_json("{\"count\":4}").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_malformed_payload_maps_to_app_error() {
    let err = CompressedSeries::from_bytes(&[1, 2, 3]).unwrap_err();
    assert_eq!(err, CodecError::TruncatedPayload { len: 3 });
    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_parallel_decode_preserves_order() {
    let records: Vec<CompressedSeries> = (1..=24_i32)
        .map(|scale| {
            let rr: Vec<f64> = workout_rr().iter().map(|v| v * f64::from(scale)).collect();
            CompressedSeries::compress(&rr, KeepPolicy::Fixed(16)).unwrap()
        })
        .collect();
    let parallel = decode_all(&records);
    let serial: Vec<Vec<f64>> = records.iter().map(CompressedSeries::decompress).collect();
    assert_eq!(parallel, serial);
}

#[test]
fn test_parallel_byte_decode_reports_bad_record() {
    let good = CompressedSeries::compress(&workout_rr(), KeepPolicy::Fixed(8))
        .unwrap()
        .to_bytes();
    let decoded = decode_all_bytes(&[good.clone(), good.clone()]).unwrap();
    assert_eq!(decoded.len(), 2);

    let bad = Bytes::from_static(&[0; 9]);
    assert_eq!(
        decode_all_bytes(&[good, bad]),
        Err(CodecError::TruncatedPayload { len: 9 })
    );
}

#[test]
fn test_header_with_huge_count_is_rejected() {
    let mut payload = CompressedSeries::compress(&workout_rr(), KeepPolicy::Fixed(8))
        .unwrap()
        .to_bytes()
        .to_vec();
    payload[..8].copy_from_slice(&u64::MAX.to_le_bytes());
    let err = CompressedSeries::from_bytes(&payload).unwrap_err();
    assert!(matches!(err, CodecError::CountOutOfRange { coefficients: 8, .. }));
    assert!(decode_all_bytes(&[Bytes::from(payload)]).is_err());

    let json = format!(r#"{{"coefficients":[1.0],"count":{}}}"#, MAX_SERIES_LEN + 1);
    let err = CompressedSeries::from_json(&json).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_lossless_record_of_odd_length() {
    let rr: Vec<f64> = workout_rr().into_iter().take(45).collect();
    let series = CompressedSeries::compress(&rr, KeepPolicy::Fixed(rr.len())).unwrap();
    assert_eq!(series.coefficients.len(), 64);
    let restored = CompressedSeries::from_bytes(&series.to_bytes()).unwrap();
    for (orig, back) in rr.iter().zip(&restored.decompress()) {
        assert!((orig - back).abs() < 1e-9);
    }
}
