// ABOUTME: Closed-form session duration estimate for planned exercises
// ABOUTME: Working time per set plus rest between sets, summed and converted to minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Duration Estimator
//!
//! Per exercise: `(sets * seconds_per_set + (sets - 1) * rest) / 60` minutes.
//! The total is always recomputed from the full list; nothing is cached.

use crate::config::DurationConfig;
use pierre_workout_core::constants::timing::SECONDS_PER_MINUTE;
use pierre_workout_core::models::{ExerciseDefinition, PlannedExercise, SessionDefaults};

/// Minutes contributed by one exercise
///
/// A zero-set exercise contributes nothing.
#[must_use]
pub fn exercise_minutes(
    target_sets: u32,
    rest_time_seconds: Option<u32>,
    config: &DurationConfig,
) -> f64 {
    let rest = rest_time_seconds.unwrap_or(config.default_rest_seconds);
    let working = f64::from(target_sets) * config.seconds_per_set;
    let resting = f64::from(target_sets.saturating_sub(1)) * f64::from(rest);
    (working + resting) / SECONDS_PER_MINUTE
}

/// Estimated total minutes of a list of planned exercises
#[must_use]
pub fn estimate_duration(exercises: &[PlannedExercise], config: &DurationConfig) -> f64 {
    exercises
        .iter()
        .map(|e| exercise_minutes(e.target_sets, e.rest_time_seconds, config))
        .sum()
}

/// Estimated total minutes of bare catalog entries planned with `defaults`
///
/// Used by the selector, which works on catalog entries before they become
/// planned exercises.
#[must_use]
pub fn estimate_definitions_duration(
    exercises: &[ExerciseDefinition],
    defaults: &SessionDefaults,
    config: &DurationConfig,
) -> f64 {
    exercise_minutes(defaults.target_sets, Some(defaults.rest_time_seconds), config)
        * exercises.len() as f64
}
