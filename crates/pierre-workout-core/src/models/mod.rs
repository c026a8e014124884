// ABOUTME: Core data models for workout plan synthesis
// ABOUTME: Re-exports exercise, plan, and balance report types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Catalog entries and planned exercises
pub mod exercise;
/// Workout plans
pub mod plan;
/// Balance analysis results
pub mod balance;

pub use balance::{BalanceReport, BalanceSuggestion, SuggestionKind};
pub use exercise::{
    DifficultyLevel, ExerciseCategory, ExerciseDefinition, PlannedExercise, SessionDefaults,
};
pub use plan::WorkoutPlan;
