// ABOUTME: Command implementations for omphalos-cli
// ABOUTME: Codec, metric and duration subcommands that print JSON on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors

pub mod codec;
pub mod duration;
pub mod metrics;

use anyhow::Result;
use serde::Serialize;

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
