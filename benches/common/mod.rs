// ABOUTME: Common benchmark utilities and catalog fixtures for performance testing
// ABOUTME: Provides reusable data generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Common benchmark utilities and catalog fixtures.

pub mod fixtures;
