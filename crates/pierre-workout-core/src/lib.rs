// ABOUTME: Core types and constants for the Pierre workout planner
// ABOUTME: Foundation crate with error handling, the exercise/plan data model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Workout Core
//!
//! Foundation crate providing shared types for the workout planner. The engine
//! crate and the CLI both depend on it, so it is kept free of algorithms.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Engine-wide constants (time per set, session defaults, thresholds)
//! - **models**: Exercise catalog entries, planned exercises, plans, and balance reports

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models (`ExerciseDefinition`, `WorkoutPlan`, `BalanceReport`, ...)
pub mod models;
