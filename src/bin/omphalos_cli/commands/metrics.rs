// ABOUTME: Statistics, heart-rate, HRV and energy subcommands
// ABOUTME: Each reads a sample list and prints its metric as JSON

use super::print_json;
use anyhow::Result;
use omphalos::config::SubjectConfig;
use omphalos::heart_rate::heart_rate_sequence;
use omphalos::hrv::HrvSummary;
use omphalos::input::read_samples;
use omphalos::logging::log_computation;
use omphalos::stats::welford_stats;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

#[derive(Serialize)]
struct EnergyReport {
    model: &'static str,
    zero_crossing_bpm: f64,
    total_joules: f64,
    cumulative_joules: Vec<f64>,
}

pub fn stats(input: Option<&Path>) -> Result<()> {
    let samples = read_samples(input)?;
    print_json(&welford_stats(&samples))
}

pub fn heart_rate(input: Option<&Path>) -> Result<()> {
    let rr = read_samples(input)?;
    let started = Instant::now();
    let bpm = heart_rate_sequence(&rr)?;
    log_computation("heart_rate", rr.len(), bpm.len(), started.elapsed().as_micros());
    print_json(&bpm)
}

pub fn hrv(input: Option<&Path>) -> Result<()> {
    let rr = read_samples(input)?;
    print_json(&HrvSummary::from_intervals(&rr)?)
}

pub fn energy(input: Option<&Path>, subject: &SubjectConfig) -> Result<()> {
    let bpm = read_samples(input)?;
    let profile = subject.energy_profile()?;
    let started = Instant::now();
    let cumulative_joules = profile.cumulative_joules(&bpm)?;
    log_computation(
        "energy",
        bpm.len(),
        cumulative_joules.len(),
        started.elapsed().as_micros(),
    );
    print_json(&EnergyReport {
        model: profile.model().name(),
        zero_crossing_bpm: profile.zero_crossing_bpm(),
        total_joules: cumulative_joules.last().copied().unwrap_or(0.0),
        cumulative_joules,
    })
}
