// ABOUTME: Benchmark fixtures for generating deterministic exercise catalogs
// ABOUTME: Provides reproducible catalogs and request sets for performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating deterministic exercise catalogs.

use pierre_workout_planner::engine::GenerationRequest;
use pierre_workout_planner::models::{DifficultyLevel, ExerciseCategory, ExerciseDefinition};

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Small catalog (50 entries) - a personal library
    Small,
    /// Medium catalog (500 entries) - a gym's full library
    Medium,
    /// Large catalog (5000 entries) - stress testing
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 500,
            Self::Large => 5000,
        }
    }
}

const MUSCLE_PATTERNS: &[&[&str]] = &[
    &["chest", "triceps"],
    &["back", "biceps"],
    &["abs", "obliques"],
    &["quadriceps", "glutes"],
    &["shoulders"],
    &["lats", "rear delts"],
    &["core", "hip flexors"],
    &["hamstrings", "calves"],
];

const DIFFICULTIES: [DifficultyLevel; 3] = [
    DifficultyLevel::Beginner,
    DifficultyLevel::Intermediate,
    DifficultyLevel::Advanced,
];

/// Generate a deterministic catalog cycling through muscle patterns and difficulties
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Vec<ExerciseDefinition> {
    (0..size.count())
        .map(|index| {
            let muscles = MUSCLE_PATTERNS[index % MUSCLE_PATTERNS.len()];
            let difficulty = DIFFICULTIES[(index / MUSCLE_PATTERNS.len()) % DIFFICULTIES.len()];
            ExerciseDefinition::new(
                format!("bench-exercise-{index}"),
                format!("Benchmark Exercise {index}"),
                ExerciseCategory::Strength,
                muscles,
                difficulty,
            )
        })
        .collect()
}

const SESSION_MINUTES: [f64; 6] = [20.0, 30.0, 45.0, 60.0, 90.0, 120.0];

/// A spread of session lengths with mixed filters
#[must_use]
pub fn generate_requests(count: usize) -> Vec<GenerationRequest> {
    (0..count)
        .map(|index| {
            let request = GenerationRequest::new(SESSION_MINUTES[index % SESSION_MINUTES.len()]);
            match index % 3 {
                0 => request,
                1 => request.with_difficulty(DifficultyLevel::Intermediate),
                _ => request.with_body_parts(["back", "chest", "abs"]),
            }
        })
        .collect()
}
