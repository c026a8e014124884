// ABOUTME: Exercise catalog loading from JSON/YAML snapshots plus the built-in starter catalog
// ABOUTME: Validates unique ids and reads serialized plans for the analyze command
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Catalog snapshots
//!
//! A catalog file is either a bare list of exercise definitions or an object
//! with an `exercises` list. The format is chosen from the file extension:
//! `.yaml`/`.yml` are read as YAML, everything else as JSON.

use pierre_workout_core::errors::{AppError, AppResult};
use pierre_workout_core::models::{
    DifficultyLevel, ExerciseCategory, ExerciseDefinition, WorkoutPlan,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Serialization format of a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// `.json` (and unrecognized extensions)
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl SnapshotFormat {
    /// Pick the format from a file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<ExerciseDefinition>),
    Wrapped { exercises: Vec<ExerciseDefinition> },
}

impl CatalogDocument {
    fn into_exercises(self) -> Vec<ExerciseDefinition> {
        match self {
            Self::List(exercises) | Self::Wrapped { exercises } => exercises,
        }
    }
}

fn parse_document<T: DeserializeOwned>(contents: &str, format: SnapshotFormat) -> AppResult<T> {
    match format {
        SnapshotFormat::Json => Ok(serde_json::from_str(contents)?),
        SnapshotFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| {
            AppError::serialization(format!("Invalid YAML document: {e}")).with_source(e)
        }),
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display()))
            .with_resource_id(path.display().to_string())
            .with_source(e)
    })?;
    parse_document(&contents, SnapshotFormat::from_path(path))
}

/// Reject catalogs with repeated ids and warn about untagged entries
///
/// # Errors
///
/// Returns `InvalidInput` naming the first repeated id
pub fn validate_catalog(catalog: &[ExerciseDefinition]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(catalog.len());

    for exercise in catalog {
        if !seen.insert(exercise.id.as_str()) {
            return Err(AppError::invalid_input(format!(
                "Duplicate exercise id '{}' in catalog",
                exercise.id
            ))
            .with_resource_id(exercise.id.clone()));
        }
        if exercise.muscle_groups.is_empty() {
            warn!(
                exercise.id = %exercise.id,
                "Exercise has no muscle groups and will never count as push, pull or core"
            );
        }
    }

    Ok(())
}

/// Parse and validate a catalog from an in-memory document
///
/// # Errors
///
/// Returns `SerializationError` for malformed documents and `InvalidInput`
/// for repeated ids
pub fn parse_catalog(contents: &str, format: SnapshotFormat) -> AppResult<Vec<ExerciseDefinition>> {
    let exercises = parse_document::<CatalogDocument>(contents, format)?.into_exercises();
    validate_catalog(&exercises)?;
    Ok(exercises)
}

/// Load and validate a catalog snapshot file
///
/// # Errors
///
/// Returns `StorageError` when the file cannot be read, `SerializationError`
/// when it cannot be parsed, and `InvalidInput` for repeated ids
pub fn load_catalog(path: &Path) -> AppResult<Vec<ExerciseDefinition>> {
    let exercises = read_document::<CatalogDocument>(path)?.into_exercises();
    validate_catalog(&exercises)?;
    info!(
        path = %path.display(),
        exercises = exercises.len(),
        "Exercise catalog loaded"
    );
    Ok(exercises)
}

/// Check the invariants a plan edited through `PlanEditor` always holds
///
/// # Errors
///
/// Returns `ResourceAlreadyExists` naming the first repeated exercise id and
/// `ValueOutOfRange` for an exercise with zero sets or reps
pub fn validate_plan(plan: &WorkoutPlan) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(plan.len());

    for planned in &plan.exercises {
        let id = planned.id();
        if !seen.insert(id) {
            return Err(AppError::already_exists(format!("Exercise '{id}' in plan"))
                .with_resource_id(id));
        }
        if planned.target_sets == 0 {
            return Err(AppError::out_of_range(format!(
                "Exercise '{id}' must have at least 1 set"
            ))
            .with_resource_id(id));
        }
        if planned.target_reps == 0 {
            return Err(AppError::out_of_range(format!(
                "Exercise '{id}' must have at least 1 rep"
            ))
            .with_resource_id(id));
        }
    }

    Ok(())
}

/// Load and validate a serialized workout plan
///
/// # Errors
///
/// Returns `StorageError` when the file cannot be read, `SerializationError`
/// when it cannot be parsed, and the errors of [`validate_plan`]
pub fn load_plan(path: &Path) -> AppResult<WorkoutPlan> {
    let plan: WorkoutPlan = read_document(path)?;
    validate_plan(&plan)?;
    debug!(plan.id = %plan.id, exercises = plan.len(), "Workout plan loaded");
    Ok(plan)
}

// ============================================================================
// Starter catalog
// ============================================================================

struct StarterExercise {
    id: &'static str,
    name: &'static str,
    category: ExerciseCategory,
    muscle_groups: &'static [&'static str],
    equipment: &'static [&'static str],
    difficulty: DifficultyLevel,
}

// Alternating push/pull/core rotations. The selector walks catalog order.
const STARTER_EXERCISES: &[StarterExercise] = &[
    // Foundation rotation: push, pull, core, legs
    StarterExercise {
        id: "push-up",
        name: "Push-up",
        category: ExerciseCategory::Strength,
        muscle_groups: &["chest", "triceps", "shoulders"],
        equipment: &[],
        difficulty: DifficultyLevel::Beginner,
    },
    StarterExercise {
        id: "inverted-row",
        name: "Inverted Row",
        category: ExerciseCategory::Strength,
        muscle_groups: &["back", "biceps"],
        equipment: &["bar"],
        difficulty: DifficultyLevel::Beginner,
    },
    StarterExercise {
        id: "dead-bug",
        name: "Dead Bug",
        category: ExerciseCategory::Flexibility,
        muscle_groups: &["core"],
        equipment: &[],
        difficulty: DifficultyLevel::Beginner,
    },
    StarterExercise {
        id: "goblet-squat",
        name: "Goblet Squat",
        category: ExerciseCategory::Strength,
        muscle_groups: &["quadriceps", "glutes"],
        equipment: &["kettlebell"],
        difficulty: DifficultyLevel::Beginner,
    },
    StarterExercise {
        id: "romanian-deadlift",
        name: "Romanian Deadlift",
        category: ExerciseCategory::Strength,
        muscle_groups: &["hamstrings", "glutes", "lower back"],
        equipment: &["barbell"],
        difficulty: DifficultyLevel::Intermediate,
    },
    // Loaded rotation
    StarterExercise {
        id: "bench-press",
        name: "Barbell Bench Press",
        category: ExerciseCategory::Strength,
        muscle_groups: &["chest", "triceps"],
        equipment: &["barbell", "bench"],
        difficulty: DifficultyLevel::Intermediate,
    },
    StarterExercise {
        id: "pull-up",
        name: "Pull-up",
        category: ExerciseCategory::Strength,
        muscle_groups: &["back", "biceps"],
        equipment: &["pull-up bar"],
        difficulty: DifficultyLevel::Intermediate,
    },
    StarterExercise {
        id: "hanging-leg-raise",
        name: "Hanging Leg Raise",
        category: ExerciseCategory::Strength,
        muscle_groups: &["abs", "hip flexors"],
        equipment: &["pull-up bar"],
        difficulty: DifficultyLevel::Intermediate,
    },
    StarterExercise {
        id: "overhead-press",
        name: "Overhead Press",
        category: ExerciseCategory::Strength,
        muscle_groups: &["shoulders", "triceps"],
        equipment: &["barbell"],
        difficulty: DifficultyLevel::Intermediate,
    },
    StarterExercise {
        id: "dumbbell-curl",
        name: "Dumbbell Curl",
        category: ExerciseCategory::Strength,
        muscle_groups: &["biceps"],
        equipment: &["dumbbells"],
        difficulty: DifficultyLevel::Beginner,
    },
    StarterExercise {
        id: "walking-lunge",
        name: "Walking Lunge",
        category: ExerciseCategory::Functional,
        muscle_groups: &["quadriceps", "glutes"],
        equipment: &[],
        difficulty: DifficultyLevel::Beginner,
    },
    StarterExercise {
        id: "kettlebell-swing",
        name: "Kettlebell Swing",
        category: ExerciseCategory::Cardio,
        muscle_groups: &["glutes", "hamstrings", "core"],
        equipment: &["kettlebell"],
        difficulty: DifficultyLevel::Intermediate,
    },
    // Advanced progressions
    StarterExercise {
        id: "ring-dip",
        name: "Ring Dip",
        category: ExerciseCategory::Strength,
        muscle_groups: &["chest", "triceps"],
        equipment: &["rings"],
        difficulty: DifficultyLevel::Advanced,
    },
    StarterExercise {
        id: "muscle-up",
        name: "Muscle-up",
        category: ExerciseCategory::Functional,
        muscle_groups: &["back", "chest", "triceps"],
        equipment: &["pull-up bar"],
        difficulty: DifficultyLevel::Advanced,
    },
    StarterExercise {
        id: "pistol-squat",
        name: "Pistol Squat",
        category: ExerciseCategory::Functional,
        muscle_groups: &["quadriceps"],
        equipment: &[],
        difficulty: DifficultyLevel::Advanced,
    },
    // Accessories and conditioning
    StarterExercise {
        id: "plank",
        name: "Plank",
        category: ExerciseCategory::Strength,
        muscle_groups: &["core", "shoulders"],
        equipment: &[],
        difficulty: DifficultyLevel::Beginner,
    },
    StarterExercise {
        id: "burpee",
        name: "Burpee",
        category: ExerciseCategory::Cardio,
        muscle_groups: &["chest", "quadriceps", "core"],
        equipment: &[],
        difficulty: DifficultyLevel::Intermediate,
    },
    StarterExercise {
        id: "jump-rope",
        name: "Jump Rope",
        category: ExerciseCategory::Cardio,
        muscle_groups: &["calves"],
        equipment: &["jump rope"],
        difficulty: DifficultyLevel::Beginner,
    },
];

/// Built-in starter catalog used when no snapshot is supplied
#[must_use]
pub fn default_catalog() -> Vec<ExerciseDefinition> {
    STARTER_EXERCISES
        .iter()
        .map(|entry| {
            ExerciseDefinition::new(
                entry.id,
                entry.name,
                entry.category,
                entry.muscle_groups,
                entry.difficulty,
            )
            .with_equipment(entry.equipment)
        })
        .collect()
}
