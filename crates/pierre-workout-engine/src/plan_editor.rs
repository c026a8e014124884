// ABOUTME: Reducer-style editing of WorkoutPlan values (add, remove, update sets/reps/rest)
// ABOUTME: Enforces the no-duplicate invariant and recomputes derived duration and difficulty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Editor
//!
//! Plans are immutable values from the engine's point of view: each action
//! consumes a plan and returns the updated one. The UI/session layer owns the
//! only mutable reference and swaps it for the returned value.

use crate::balance::estimate_difficulty;
use crate::config::{DifficultyThresholds, DurationConfig, PlannerConfig};
use crate::duration::estimate_duration;
use pierre_workout_core::errors::{AppError, AppResult};
use pierre_workout_core::models::{
    ExerciseDefinition, PlannedExercise, SessionDefaults, WorkoutPlan,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// An edit applied to a plan
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanAction {
    /// Append a catalog entry with the session defaults
    AddExercise {
        /// Entry to add
        exercise: ExerciseDefinition,
    },
    /// Remove an entry by exercise id
    RemoveExercise {
        /// Exercise to remove
        exercise_id: String,
    },
    /// Change the number of sets
    UpdateSets {
        /// Exercise to update
        exercise_id: String,
        /// New set count (positive)
        sets: u32,
    },
    /// Change the repetitions per set
    UpdateReps {
        /// Exercise to update
        exercise_id: String,
        /// New repetition count (positive)
        reps: u32,
    },
    /// Change or clear the rest between sets
    UpdateRest {
        /// Exercise to update
        exercise_id: String,
        /// New rest in seconds; `None` falls back to the configured default
        rest_time_seconds: Option<u32>,
    },
}

/// Applies [`PlanAction`]s and keeps derived plan fields current
#[derive(Debug, Clone, Default)]
pub struct PlanEditor {
    duration: DurationConfig,
    difficulty: DifficultyThresholds,
    session_defaults: SessionDefaults,
}

impl PlanEditor {
    /// Build an editor from the planner configuration
    #[must_use]
    pub const fn from_config(config: &PlannerConfig) -> Self {
        Self {
            duration: config.duration,
            difficulty: config.difficulty,
            session_defaults: config.session_defaults,
        }
    }

    /// Create an empty plan
    #[must_use]
    pub fn new_plan(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        target_body_parts: Vec<String>,
    ) -> WorkoutPlan {
        self.refresh(WorkoutPlan::new(name, description, target_body_parts))
    }

    /// Build a plan from generator output, dropping repeated ids
    #[must_use]
    pub fn from_generated(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        target_body_parts: Vec<String>,
        exercises: Vec<ExerciseDefinition>,
    ) -> WorkoutPlan {
        let mut plan = WorkoutPlan::new(name, description, target_body_parts);
        let mut seen = HashSet::new();

        for exercise in exercises {
            if seen.insert(exercise.id.clone()) {
                plan.exercises
                    .push(PlannedExercise::from_definition(exercise, &self.session_defaults));
            } else {
                warn!(exercise.id = %exercise.id, "Dropping repeated exercise from generated plan");
            }
        }

        self.refresh(plan)
    }

    /// Apply one action, returning the updated plan
    ///
    /// # Errors
    ///
    /// - `ResourceAlreadyExists` when adding an exercise id already in the plan
    /// - `ResourceNotFound` when the referenced exercise id is not in the plan
    /// - `ValueOutOfRange` when setting sets or reps to zero
    pub fn apply(&self, mut plan: WorkoutPlan, action: PlanAction) -> AppResult<WorkoutPlan> {
        match action {
            PlanAction::AddExercise { exercise } => {
                if plan.contains(&exercise.id) {
                    return Err(AppError::already_exists(format!(
                        "Exercise '{}' in plan",
                        exercise.id
                    ))
                    .with_resource_id(exercise.id));
                }
                debug!(plan.id = %plan.id, exercise.id = %exercise.id, "Adding exercise to plan");
                plan.exercises
                    .push(PlannedExercise::from_definition(exercise, &self.session_defaults));
            }
            PlanAction::RemoveExercise { exercise_id } => {
                let index = find(&plan, &exercise_id)?;
                debug!(plan.id = %plan.id, exercise.id = %exercise_id, "Removing exercise from plan");
                plan.exercises.remove(index);
            }
            PlanAction::UpdateSets { exercise_id, sets } => {
                if sets == 0 {
                    return Err(AppError::out_of_range("Sets must be at least 1")
                        .with_resource_id(exercise_id));
                }
                let index = find(&plan, &exercise_id)?;
                plan.exercises[index].target_sets = sets;
            }
            PlanAction::UpdateReps { exercise_id, reps } => {
                if reps == 0 {
                    return Err(AppError::out_of_range("Reps must be at least 1")
                        .with_resource_id(exercise_id));
                }
                let index = find(&plan, &exercise_id)?;
                plan.exercises[index].target_reps = reps;
            }
            PlanAction::UpdateRest {
                exercise_id,
                rest_time_seconds,
            } => {
                let index = find(&plan, &exercise_id)?;
                plan.exercises[index].rest_time_seconds = rest_time_seconds;
            }
        }

        Ok(self.refresh(plan))
    }

    /// Apply a sequence of actions, stopping at the first failure
    ///
    /// # Errors
    ///
    /// Returns the error of the first action that fails
    pub fn apply_all<I>(&self, plan: WorkoutPlan, actions: I) -> AppResult<WorkoutPlan>
    where
        I: IntoIterator<Item = PlanAction>,
    {
        actions
            .into_iter()
            .try_fold(plan, |plan, action| self.apply(plan, action))
    }

    /// Recompute the derived fields from the exercise list
    #[must_use]
    pub fn refresh(&self, mut plan: WorkoutPlan) -> WorkoutPlan {
        plan.estimated_duration_minutes = estimate_duration(&plan.exercises, &self.duration);
        plan.difficulty = estimate_difficulty(&plan.exercises, &self.difficulty);
        plan
    }
}

fn find(plan: &WorkoutPlan, exercise_id: &str) -> AppResult<usize> {
    plan.position(exercise_id).ok_or_else(|| {
        AppError::not_found(format!("Exercise '{exercise_id}' in plan"))
            .with_resource_id(exercise_id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_workout_core::errors::ErrorCode;
    use pierre_workout_core::models::{DifficultyLevel, ExerciseCategory};

    fn exercise(id: &str, difficulty: DifficultyLevel) -> ExerciseDefinition {
        ExerciseDefinition::new(id, id, ExerciseCategory::Strength, &["chest"], difficulty)
    }

    fn add(id: &str, difficulty: DifficultyLevel) -> PlanAction {
        PlanAction::AddExercise {
            exercise: exercise(id, difficulty),
        }
    }

    #[test]
    fn test_add_recomputes_derived_fields() {
        let editor = PlanEditor::default();
        let plan = editor.new_plan("Upper", "", vec![]);
        assert!(plan.estimated_duration_minutes.abs() < f64::EPSILON);

        let plan = editor
            .apply(plan, add("bench", DifficultyLevel::Advanced))
            .unwrap();
        assert_eq!(plan.len(), 1);
        assert!((plan.estimated_duration_minutes - 4.25).abs() < 1e-9);
        assert_eq!(plan.difficulty, DifficultyLevel::Advanced);
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let editor = PlanEditor::default();
        let plan = editor
            .apply(
                editor.new_plan("Upper", "", vec![]),
                add("bench", DifficultyLevel::Beginner),
            )
            .unwrap();
        let error = editor
            .apply(plan, add("bench", DifficultyLevel::Beginner))
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
        assert_eq!(error.resource_id.as_deref(), Some("bench"));
    }

    #[test]
    fn test_update_sets_and_rest() {
        let editor = PlanEditor::default();
        let plan = editor
            .apply_all(
                editor.new_plan("Upper", "", vec![]),
                vec![
                    add("bench", DifficultyLevel::Beginner),
                    PlanAction::UpdateSets {
                        exercise_id: "bench".into(),
                        sets: 5,
                    },
                    PlanAction::UpdateRest {
                        exercise_id: "bench".into(),
                        rest_time_seconds: Some(90),
                    },
                ],
            )
            .unwrap();
        // (5 * 45 + 4 * 90) / 60
        assert!((plan.estimated_duration_minutes - 9.75).abs() < 1e-9);
    }

    #[test]
    fn test_zero_reps_rejected() {
        let editor = PlanEditor::default();
        let plan = editor
            .apply(
                editor.new_plan("Upper", "", vec![]),
                add("bench", DifficultyLevel::Beginner),
            )
            .unwrap();
        let error = editor
            .apply(
                plan,
                PlanAction::UpdateReps {
                    exercise_id: "bench".into(),
                    reps: 0,
                },
            )
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_remove_unknown_exercise() {
        let editor = PlanEditor::default();
        let error = editor
            .apply(
                editor.new_plan("Upper", "", vec![]),
                PlanAction::RemoveExercise {
                    exercise_id: "ghost".into(),
                },
            )
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_from_generated_drops_repeats() {
        let editor = PlanEditor::default();
        let plan = editor.from_generated(
            "Generated",
            "",
            vec![],
            vec![
                exercise("bench", DifficultyLevel::Beginner),
                exercise("bench", DifficultyLevel::Beginner),
                exercise("fly", DifficultyLevel::Intermediate),
            ],
        );
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.difficulty, DifficultyLevel::Intermediate);
        assert!((plan.estimated_duration_minutes - 8.5).abs() < 1e-9);
    }
}
