// ABOUTME: Workout plan synthesis and balance engine for the Pierre workout planner
// ABOUTME: Catalog filter, movement classifier, duration estimator, greedy selector, advisor, editor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Workout Engine
//!
//! Pure, synchronous pipeline that turns an exercise catalog into a
//! time-boxed, push/pull balanced workout plan.
//!
//! ## Components
//!
//! - **`catalog_filter`**: narrows the catalog by difficulty and body parts
//! - **balance**: push/pull/core tagging and aggregate difficulty
//! - **duration**: session length estimate
//! - **selector**: greedy selection under balance and duration budgets
//! - **advisor**: balance report with ordered suggestions
//! - **`plan_editor`**: reducer-style plan edits
//! - **engine**: facade holding one explicit [`PlannerConfig`]
//!
//! Nothing in this crate performs I/O or keeps global state; all types are
//! `Send + Sync`.

/// Balance report and suggestions
pub mod advisor;

/// Movement tags, counts and difficulty estimation
pub mod balance;

/// Difficulty and body-part filtering of the catalog
pub mod catalog_filter;

/// Engine configuration with environment overrides
pub mod config;

/// Session duration estimate
pub mod duration;

/// Facade over the whole pipeline
pub mod engine;

/// Plan editing actions
pub mod plan_editor;

/// Greedy exercise selection
pub mod selector;

pub use advisor::BalanceAdvisor;
pub use balance::{estimate_difficulty, MovementClassifier, MovementCounts, MovementTags};
pub use catalog_filter::filter_catalog;
pub use config::{ConfigError, PlannerConfig};
pub use duration::estimate_duration;
pub use engine::WorkoutEngine;
pub use plan_editor::{PlanAction, PlanEditor};
pub use selector::{GenerationRequest, GreedySelector, PlanSelector, SelectionRule};
