// ABOUTME: Workout plan value type with ordered, deduplicated planned exercises
// ABOUTME: Derived fields (duration, difficulty) are maintained by the engine's plan editor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::exercise::{DifficultyLevel, PlannedExercise};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A workout plan handed to the session player / persistence layer
///
/// Plans are plain values: every edit goes through the engine's plan editor,
/// which consumes the plan and returns an updated copy with
/// `estimated_duration_minutes` and `difficulty` recomputed. Exercise order is
/// execution order, and no two entries share an exercise id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Plan identifier for the persistence layer
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Exercises in execution order
    #[serde(default)]
    pub exercises: Vec<PlannedExercise>,
    /// Requested body parts (empty means full body)
    #[serde(default)]
    pub target_body_parts: Vec<String>,
    /// Derived: estimated session length in minutes
    #[serde(default)]
    pub estimated_duration_minutes: f64,
    /// Derived: aggregate difficulty
    #[serde(default)]
    pub difficulty: DifficultyLevel,
}

impl WorkoutPlan {
    /// Create an empty plan
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        target_body_parts: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            exercises: Vec::new(),
            target_body_parts,
            estimated_duration_minutes: 0.0,
            difficulty: DifficultyLevel::Beginner,
        }
    }

    /// Whether the plan already contains the given exercise id
    #[must_use]
    pub fn contains(&self, exercise_id: &str) -> bool {
        self.exercises.iter().any(|e| e.id() == exercise_id)
    }

    /// Position of the given exercise id in execution order
    #[must_use]
    pub fn position(&self, exercise_id: &str) -> Option<usize> {
        self.exercises.iter().position(|e| e.id() == exercise_id)
    }

    /// Number of exercises in the plan
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the plan has no exercises
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
