// ABOUTME: Common benchmark utilities and fixtures for Omphalos performance testing
// ABOUTME: Provides deterministic RR-interval and heart-rate generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Omphalos Contributors

//! Common benchmark utilities and test fixtures.

pub mod fixtures;
