// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides catalog builders, exercise helpers and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `pierre_workout_planner`

use pierre_workout_planner::models::{DifficultyLevel, ExerciseCategory, ExerciseDefinition};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        // A logging test may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Strength exercise with the given muscle groups
pub fn exercise(id: &str, muscles: &[&str], difficulty: DifficultyLevel) -> ExerciseDefinition {
    ExerciseDefinition::new(id, id, ExerciseCategory::Strength, muscles, difficulty)
}

/// Push-up, Squat, Pull-up trio
pub fn scenario_a_catalog() -> Vec<ExerciseDefinition> {
    vec![
        ExerciseDefinition::new(
            "push-up",
            "Push-up",
            ExerciseCategory::Strength,
            &["chest", "triceps"],
            DifficultyLevel::Beginner,
        ),
        ExerciseDefinition::new(
            "squat",
            "Squat",
            ExerciseCategory::Strength,
            &["quadriceps", "glutes"],
            DifficultyLevel::Beginner,
        ),
        ExerciseDefinition::new(
            "pull-up",
            "Pull-up",
            ExerciseCategory::Strength,
            &["back", "biceps"],
            DifficultyLevel::Intermediate,
        ),
    ]
}

/// Large mixed catalog cycling through push, pull, core and untagged entries
pub fn mixed_catalog(size: usize) -> Vec<ExerciseDefinition> {
    const PATTERNS: &[&[&str]] = &[
        &["chest", "triceps"],
        &["back", "biceps"],
        &["shoulders"],
        &["hamstrings"],
        &["abs"],
        &["quadriceps", "glutes"],
        &["calves"],
        &["core", "back"],
    ];
    const LEVELS: &[DifficultyLevel] = &[
        DifficultyLevel::Beginner,
        DifficultyLevel::Intermediate,
        DifficultyLevel::Advanced,
    ];

    (0..size)
        .map(|i| {
            exercise(
                &format!("exercise-{i:03}"),
                PATTERNS[i % PATTERNS.len()],
                LEVELS[i % LEVELS.len()],
            )
        })
        .collect()
}
