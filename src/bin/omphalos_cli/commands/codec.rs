// ABOUTME: Encode and decode subcommands for persisted wavelet records
// ABOUTME: Encode prints a CompressedSeries as JSON; decode prints the reconstructed samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors

use super::print_json;
use anyhow::Result;
use omphalos::input::{read_input, read_samples};
use omphalos::logging::log_computation;
use omphalos::storage::CompressedSeries;
use omphalos::wavelet::KeepPolicy;
use std::path::Path;
use std::time::Instant;

pub fn encode(input: Option<&Path>, policy: KeepPolicy) -> Result<()> {
    let samples = read_samples(input)?;
    let started = Instant::now();
    let series = CompressedSeries::compress(&samples, policy)?;
    log_computation(
        "encode",
        samples.len(),
        series.coefficients.len(),
        started.elapsed().as_micros(),
    );
    print_json(&series)
}

pub fn decode(input: Option<&Path>) -> Result<()> {
    let series = CompressedSeries::from_json(&read_input(input)?)?;
    let started = Instant::now();
    let samples = series.decompress();
    log_computation(
        "decode",
        series.coefficients.len(),
        samples.len(),
        started.elapsed().as_micros(),
    );
    print_json(&samples)
}
