// ABOUTME: Omphalos CLI - command-line access to the codec and physiological metrics
// ABOUTME: Reads sample lists from a file or stdin and prints JSON results on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors
//!
//! Usage:
//! ```bash
//! # Compress RR intervals with the configured keep policy
//! omphalos-cli encode rr.txt > series.json
//!
//! # Keep only the first 8 coefficients
//! omphalos-cli encode --keep 8 rr.txt
//!
//! # Reconstruct the samples from a stored record
//! omphalos-cli decode series.json
//!
//! # 1 Hz heart rate and HRV from RR intervals on stdin
//! cat rr.txt | omphalos-cli heart-rate
//! omphalos-cli hrv rr.txt
//!
//! # Cumulative energy from a heart-rate file
//! omphalos-cli energy bpm.txt --age 35 --sex m --weight 72
//!
//! # Durations
//! omphalos-cli duration format 125
//! omphalos-cli duration parse "1h 30m"
//! ```

mod commands;

use clap::{Parser, Subcommand};
use omphalos::config::OmphalosConfig;
use omphalos::logging::{init_from_env, LoggingConfig};
use omphalos::physiology::Sex;
use omphalos::wavelet::KeepPolicy;
use std::path::PathBuf;
use tracing::debug;

type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(
    name = "omphalos-cli",
    about = "Omphalos signal toolkit",
    long_about = "Compress sensor sequences and compute heart-rate, HRV and energy metrics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compress a sample list into a coefficient record (JSON)
    Encode {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,

        /// Keep policy: `sqrt`, a coefficient count, or `drop:<levels>`
        #[arg(long)]
        keep: Option<KeepPolicy>,
    },

    /// Reconstruct samples from a coefficient record (JSON)
    Decode {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,
    },

    /// Summary statistics of a sample list
    Stats {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,
    },

    /// 1 Hz heart rate from RR intervals in milliseconds
    HeartRate {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,
    },

    /// SDRR and RMSSD from RR intervals in milliseconds
    Hrv {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,
    },

    /// Cumulative energy in joules from a 1 Hz heart-rate sequence
    Energy {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,

        /// Age in years (defaults to `OMPHALOS_SUBJECT_AGE`)
        #[arg(long)]
        age: Option<f64>,

        /// Sex: m, f or o (defaults to `OMPHALOS_SUBJECT_SEX`)
        #[arg(long)]
        sex: Option<Sex>,

        /// Weight in kilograms (defaults to `OMPHALOS_SUBJECT_WEIGHT_KG`)
        #[arg(long)]
        weight: Option<f64>,

        /// VO2max in mL/(kg·min) (defaults to `OMPHALOS_SUBJECT_VO2MAX`)
        #[arg(long)]
        vo2max: Option<f64>,
    },

    /// Duration formatting and parsing
    Duration {
        #[command(subcommand)]
        action: DurationCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum DurationCommand {
    /// Render seconds as a compact duration
    Format {
        /// Duration in seconds
        #[arg(allow_hyphen_values = true)]
        seconds: f64,
    },

    /// Parse a compact duration into seconds
    Parse {
        /// Duration text such as "1h 30m"
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let mut logging = LoggingConfig::from_env();
        logging.level = "debug".into();
        logging.init()?;
    } else {
        init_from_env()?;
    }

    let config = OmphalosConfig::from_env();
    debug!(?config, "omphalos-cli configuration");

    match cli.command {
        Command::Encode { input, keep } => {
            commands::codec::encode(input.as_deref(), keep.unwrap_or(config.codec.keep_policy))?;
        }
        Command::Decode { input } => commands::codec::decode(input.as_deref())?,
        Command::Stats { input } => commands::metrics::stats(input.as_deref())?,
        Command::HeartRate { input } => commands::metrics::heart_rate(input.as_deref())?,
        Command::Hrv { input } => commands::metrics::hrv(input.as_deref())?,
        Command::Energy {
            input,
            age,
            sex,
            weight,
            vo2max,
        } => {
            let mut subject = config.subject;
            subject.age_years = age.unwrap_or(subject.age_years);
            subject.sex = sex.or(subject.sex);
            subject.weight_kg = weight.unwrap_or(subject.weight_kg);
            subject.vo2max = vo2max.or(subject.vo2max);
            commands::metrics::energy(input.as_deref(), &subject)?;
        }
        Command::Duration { action } => match action {
            DurationCommand::Format { seconds } => commands::duration::format(seconds),
            DurationCommand::Parse { text } => commands::duration::parse(&text)?,
        },
    }

    Ok(())
}
