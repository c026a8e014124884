// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for workout-planner
// ABOUTME: Provides catalog inspection and plan generation/analysis commands

pub mod catalog;
pub mod plan;
