// ABOUTME: Narrows the exercise catalog by difficulty policy and requested body parts
// ABOUTME: Permissive asymmetric difficulty filter plus case-insensitive substring body-part match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog Filter
//!
//! The difficulty filter only drops the opposite extreme: a beginner request
//! still admits intermediate exercises, an advanced request still admits
//! intermediate ones. Output keeps catalog order.

use pierre_workout_core::models::{DifficultyLevel, ExerciseDefinition};

/// Whether an exercise is admitted under the requested difficulty
#[must_use]
pub const fn difficulty_allows(requested: Option<DifficultyLevel>, exercise: DifficultyLevel) -> bool {
    match requested {
        Some(DifficultyLevel::Beginner) => !matches!(exercise, DifficultyLevel::Advanced),
        Some(DifficultyLevel::Advanced) => !matches!(exercise, DifficultyLevel::Beginner),
        Some(DifficultyLevel::Intermediate) | None => true,
    }
}

/// Lowercased, non-blank requested body parts
#[must_use]
pub fn normalize_body_parts<S: AsRef<str>>(body_parts: &[S]) -> Vec<String> {
    body_parts
        .iter()
        .map(|part| part.as_ref().trim().to_lowercase())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Whether any muscle group of the exercise matches any requested body part
///
/// A muscle group matches when it contains a requested part, ignoring case,
/// so `back` matches `lower back` but `upper back` does not match `back`.
/// An empty request matches everything.
#[must_use]
pub fn targets_body_parts(exercise: &ExerciseDefinition, normalized_parts: &[String]) -> bool {
    if normalized_parts.is_empty() {
        return true;
    }

    exercise.muscle_groups.iter().any(|muscle| {
        let muscle = muscle.trim().to_lowercase();
        !muscle.is_empty()
            && normalized_parts
                .iter()
                .any(|part| muscle.contains(part.as_str()))
    })
}

/// Subset of the catalog that passes both filters, in catalog order
#[must_use]
pub fn filter_catalog<S: AsRef<str>>(
    catalog: &[ExerciseDefinition],
    difficulty: Option<DifficultyLevel>,
    body_parts: &[S],
) -> Vec<ExerciseDefinition> {
    let parts = normalize_body_parts(body_parts);

    catalog
        .iter()
        .filter(|exercise| difficulty_allows(difficulty, exercise.difficulty))
        .filter(|exercise| targets_body_parts(exercise, &parts))
        .cloned()
        .collect()
}
