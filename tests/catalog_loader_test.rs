// ABOUTME: Integration tests for catalog and plan snapshot loading
// ABOUTME: JSON and YAML catalogs, duplicate id rejection, missing files and malformed input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_workout_planner::catalog::{default_catalog, load_catalog, load_plan};
use pierre_workout_planner::engine::{GenerationRequest, WorkoutEngine};
use pierre_workout_planner::errors::ErrorCode;
use pierre_workout_planner::models::{DifficultyLevel, ExerciseCategory};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_json_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "catalog.json",
        r#"[
            {"id": "bench", "name": "Bench Press", "category": "strength",
             "muscleGroups": ["Chest", "Triceps"], "equipment": ["barbell"],
             "difficulty": "intermediate"},
            {"id": "row", "name": "Row", "muscleGroups": ["back"]}
        ]"#,
    );

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].difficulty, DifficultyLevel::Intermediate);
    assert_eq!(catalog[0].equipment, vec!["barbell".to_owned()]);
    assert_eq!(catalog[1].category, ExerciseCategory::Strength);
    assert_eq!(catalog[1].difficulty, DifficultyLevel::Beginner);
}

#[test]
fn test_load_wrapped_yaml_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "catalog.yaml",
        "exercises:
  - id: plank
    name: Plank
    category: strength
    muscleGroups: [core]
    difficulty: beginner
  - id: stretch
    name: Neck Stretch
    category: flexibility
",
    );

    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[1].category, ExerciseCategory::Flexibility);
    assert!(catalog[1].muscle_groups.is_empty());
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "catalog.json",
        r#"[{"id": "bench", "name": "A"}, {"id": "bench", "name": "B"}]"#,
    );

    let error = load_catalog(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.resource_id.as_deref(), Some("bench"));
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let error = load_catalog(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_malformed_yaml_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "catalog.yml", "exercises: [ {id: broken");
    let error = load_catalog(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_unknown_difficulty_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "catalog.json",
        r#"[{"id": "bench", "name": "A", "difficulty": "elite"}]"#,
    );
    let error = load_catalog(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_saved_plan_round_trips_through_file() {
    let engine = WorkoutEngine::default();
    let plan = engine.build_plan(
        "Saved",
        &default_catalog(),
        &GenerationRequest::new(30.0).with_difficulty(DifficultyLevel::Beginner),
    );

    let dir = TempDir::new().unwrap();
    let path = write(&dir, "plan.json", &serde_json::to_string(&plan).unwrap());
    let loaded = load_plan(&path).unwrap();

    assert_eq!(loaded.id, plan.id);
    assert_eq!(loaded.exercises, plan.exercises);
}

#[test]
fn test_starter_catalog_generates_a_balanced_half_hour() {
    let engine = WorkoutEngine::default();
    let plan = engine.build_plan("Starter", &default_catalog(), &GenerationRequest::new(30.0));
    let report = engine.analyze_balance(&plan.exercises);

    assert_eq!(plan.len(), 8);
    assert!(report.is_balanced);
    assert!(report.core_count >= 1);
}

fn planned_json(id: &str, sets: u32, reps: u32) -> String {
    format!(
        r#"{{"id": "{id}", "name": "{id}", "muscleGroups": ["chest"], "targetSets": {sets}, "targetReps": {reps}}}"#
    )
}

fn plan_json(exercises: &[String]) -> String {
    format!(
        r#"{{"id": "6f1c1f0e-3a52-4c55-9d7f-0b6b5a2f3e11", "name": "Saved", "exercises": [{}]}}"#,
        exercises.join(", ")
    )
}

#[test]
fn test_plan_with_repeated_exercise_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "plan.json",
        &plan_json(&[planned_json("bench", 3, 10), planned_json("bench", 4, 8)]),
    );

    let error = load_plan(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(error.resource_id.as_deref(), Some("bench"));
}

#[test]
fn test_plan_with_zero_sets_or_reps_is_rejected() {
    let dir = TempDir::new().unwrap();

    let zero_sets = write(&dir, "sets.json", &plan_json(&[planned_json("bench", 0, 10)]));
    let error = load_plan(&zero_sets).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);

    let zero_reps = write(&dir, "reps.json", &plan_json(&[planned_json("row", 3, 0)]));
    let error = load_plan(&zero_reps).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.resource_id.as_deref(), Some("row"));
}

#[test]
fn test_valid_hand_written_plan_loads() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "plan.yaml",
        "id: 6f1c1f0e-3a52-4c55-9d7f-0b6b5a2f3e11
name: Saved
exercises:
  - id: bench
    name: Bench
    muscleGroups: [chest]
    targetSets: 3
    targetReps: 10
  - id: row
    name: Row
    muscleGroups: [back]
    targetSets: 3
    targetReps: 10
",
    );

    let plan = load_plan(&path).unwrap();
    assert_eq!(plan.len(), 2);
    assert_eq!(plan.exercises[1].rest_time_seconds, None);
}
