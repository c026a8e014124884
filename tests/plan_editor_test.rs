// ABOUTME: Integration tests for reducer-style plan editing
// ABOUTME: Validates duplicate rejection, derived field recomputation and serialized plan shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{exercise, scenario_a_catalog};
use pierre_workout_planner::engine::{GenerationRequest, PlanAction, WorkoutEngine};
use pierre_workout_planner::errors::ErrorCode;
use pierre_workout_planner::models::{DifficultyLevel, WorkoutPlan};
use serde_json::Value;

fn add(id: &str, muscles: &[&str], difficulty: DifficultyLevel) -> PlanAction {
    PlanAction::AddExercise {
        exercise: exercise(id, muscles, difficulty),
    }
}

#[test]
fn test_edit_sequence_recomputes_duration_and_difficulty() {
    let engine = WorkoutEngine::default();
    let editor = engine.editor();

    let plan = editor.new_plan("Pull day", "Back and biceps", vec!["back".into()]);
    let plan = engine
        .apply_action(plan, add("row", &["back"], DifficultyLevel::Beginner))
        .unwrap();
    let plan = engine
        .apply_action(plan, add("pull-up", &["back", "biceps"], DifficultyLevel::Advanced))
        .unwrap();
    assert!((plan.estimated_duration_minutes - 8.5).abs() < 1e-9);
    assert_eq!(plan.difficulty, DifficultyLevel::Intermediate);

    let plan = engine
        .apply_action(
            plan,
            PlanAction::RemoveExercise {
                exercise_id: "row".into(),
            },
        )
        .unwrap();
    assert_eq!(plan.len(), 1);
    assert!((plan.estimated_duration_minutes - 4.25).abs() < 1e-9);
    assert_eq!(plan.difficulty, DifficultyLevel::Advanced);
}

#[test]
fn test_duplicate_add_keeps_plan_unchanged() {
    let engine = WorkoutEngine::default();
    let plan = engine
        .apply_action(
            engine.editor().new_plan("Push", "", vec![]),
            add("bench", &["chest"], DifficultyLevel::Beginner),
        )
        .unwrap();
    let snapshot = plan.clone();

    let error = engine
        .apply_action(plan, add("bench", &["chest"], DifficultyLevel::Beginner))
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(snapshot.len(), 1);
}

#[test]
fn test_zero_sets_rejected() {
    let engine = WorkoutEngine::default();
    let plan = engine
        .apply_action(
            engine.editor().new_plan("Push", "", vec![]),
            add("bench", &["chest"], DifficultyLevel::Beginner),
        )
        .unwrap();

    let error = engine
        .apply_action(
            plan,
            PlanAction::UpdateSets {
                exercise_id: "bench".into(),
                sets: 0,
            },
        )
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_cleared_rest_falls_back_to_default() {
    let engine = WorkoutEngine::default();
    let plan = engine
        .editor()
        .apply_all(
            engine.editor().new_plan("Push", "", vec![]),
            vec![
                add("bench", &["chest"], DifficultyLevel::Beginner),
                PlanAction::UpdateRest {
                    exercise_id: "bench".into(),
                    rest_time_seconds: None,
                },
            ],
        )
        .unwrap();
    assert_eq!(plan.exercises[0].rest_time_seconds, None);
    assert!((plan.estimated_duration_minutes - 4.25).abs() < 1e-9);
}

#[test]
fn test_built_plan_serializes_in_camel_case_and_round_trips() {
    let engine = WorkoutEngine::default();
    let plan = engine.build_plan("Full body", &scenario_a_catalog(), &GenerationRequest::new(45.0));

    let json = serde_json::to_value(&plan).unwrap();
    assert!(json.get("estimatedDurationMinutes").is_some());
    assert!(json.get("targetBodyParts").is_some());
    let first = &json["exercises"][0];
    assert_eq!(first["id"], Value::from("push-up"));
    assert_eq!(first["targetSets"], Value::from(3));
    assert!(first["muscleGroups"].is_array());

    let parsed: WorkoutPlan = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, plan);
}

#[test]
fn test_actions_deserialize_from_tagged_json() {
    let action: PlanAction = serde_json::from_str(
        r#"{"type": "update_reps", "exercise_id": "bench", "reps": 12}"#,
    )
    .unwrap();
    assert_eq!(
        action,
        PlanAction::UpdateReps {
            exercise_id: "bench".into(),
            reps: 12,
        }
    );
}
