// ABOUTME: Main library entry point for the Pierre workout planner
// ABOUTME: Re-exports the engine and data model, adds catalog loading and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Workout Planner
//!
//! Builds time-boxed, muscle-group balanced workout plans from an exercise
//! catalog and reviews existing plans for push/pull/core balance.
//!
//! ## Architecture
//!
//! - **`pierre-workout-core`**: exercise/plan data model, `AppError`, constants
//! - **`pierre-workout-engine`**: filter, classifier, duration estimate,
//!   greedy selector, advisor, plan editor
//! - **this crate**: catalog snapshots, logging, and the `workout-planner` CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_workout_planner::catalog::default_catalog;
//! use pierre_workout_planner::engine::{GenerationRequest, WorkoutEngine};
//!
//! let engine = WorkoutEngine::default();
//! let request = GenerationRequest::new(30.0).with_body_parts(["chest", "back"]);
//! let plan = engine.build_plan("Upper body", &default_catalog(), &request);
//! let report = engine.analyze_balance(&plan.exercises);
//! println!("{} exercises, balanced: {}", plan.len(), report.is_balanced);
//! ```

/// Catalog snapshot loading and the built-in starter catalog
pub mod catalog;

/// Structured logging setup
pub mod logging;

/// Data model and constants
pub use pierre_workout_core::{constants, models};

/// Unified error handling
pub use pierre_workout_core::errors;

/// Planning engine
pub use pierre_workout_engine as engine;
