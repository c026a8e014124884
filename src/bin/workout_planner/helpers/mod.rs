// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for workout-planner
// ABOUTME: Provides input resolution and display formatting utilities

pub mod display;
pub mod inputs;
