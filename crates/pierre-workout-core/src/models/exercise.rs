// ABOUTME: Exercise catalog entries and their session-augmented planned form
// ABOUTME: Defines ExerciseCategory, DifficultyLevel, ExerciseDefinition, PlannedExercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::session_defaults;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad category of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Resistance training
    #[default]
    Strength,
    /// Conditioning and endurance work
    Cardio,
    /// Mobility and stretching
    Flexibility,
    /// Sport-specific drills
    Sports,
    /// Compound, real-world movement patterns
    Functional,
}

impl ExerciseCategory {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
            Self::Sports => "sports",
            Self::Functional => "functional",
        }
    }
}

impl FromStr for ExerciseCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "cardio" => Ok(Self::Cardio),
            "flexibility" => Ok(Self::Flexibility),
            "sports" => Ok(Self::Sports),
            "functional" => Ok(Self::Functional),
            other => Err(AppError::invalid_input(format!(
                "Unknown exercise category: '{other}'. Valid options: strength, cardio, flexibility, sports, functional"
            ))),
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty level of an exercise or a whole plan
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    /// Suitable for people with no prior training
    #[default]
    Beginner,
    /// Requires some training background
    Intermediate,
    /// For experienced athletes
    Advanced,
}

impl DifficultyLevel {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Numeric score used for difficulty aggregation (1-3)
    #[must_use]
    pub const fn score(&self) -> u8 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
        }
    }
}

impl FromStr for DifficultyLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown difficulty level: '{other}'. Valid options: beginner, intermediate, advanced"
            ))),
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry of the exercise catalog
///
/// Catalog entries are owned by the exercise library and never mutated by the
/// engine. A missing `muscleGroups` field deserializes to an empty list, which
/// classifies as neither push, pull, nor core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDefinition {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Exercise category
    #[serde(default)]
    pub category: ExerciseCategory,
    /// Muscle groups worked (case-insensitive)
    #[serde(default)]
    pub muscle_groups: Vec<String>,
    /// Equipment required
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Difficulty level
    #[serde(default)]
    pub difficulty: DifficultyLevel,
}

impl ExerciseDefinition {
    /// Create a catalog entry without equipment
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ExerciseCategory,
        muscle_groups: &[&str],
        difficulty: DifficultyLevel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            muscle_groups: muscle_groups.iter().map(|&m| m.to_owned()).collect(),
            equipment: Vec::new(),
            difficulty,
        }
    }

    /// Builder-style equipment setter
    #[must_use]
    pub fn with_equipment(mut self, equipment: &[&str]) -> Self {
        self.equipment = equipment.iter().map(|&e| e.to_owned()).collect();
        self
    }
}

impl AsRef<Self> for ExerciseDefinition {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// Session parameters applied when a catalog entry is added to a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDefaults {
    /// Number of sets
    pub target_sets: u32,
    /// Repetitions per set
    pub target_reps: u32,
    /// Rest between sets, in seconds
    pub rest_time_seconds: u32,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            target_sets: session_defaults::TARGET_SETS,
            target_reps: session_defaults::TARGET_REPS,
            rest_time_seconds: session_defaults::REST_TIME_SECONDS,
        }
    }
}

/// A catalog entry augmented with the parameters of one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    /// The underlying catalog entry
    #[serde(flatten)]
    pub exercise: ExerciseDefinition,
    /// Number of sets (positive)
    pub target_sets: u32,
    /// Repetitions per set (positive)
    pub target_reps: u32,
    /// Rest between sets; `None` means the configured default applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time_seconds: Option<u32>,
}

impl PlannedExercise {
    /// Plan a catalog entry with the given session defaults
    #[must_use]
    pub fn from_definition(exercise: ExerciseDefinition, defaults: &SessionDefaults) -> Self {
        Self {
            exercise,
            target_sets: defaults.target_sets,
            target_reps: defaults.target_reps,
            rest_time_seconds: Some(defaults.rest_time_seconds),
        }
    }

    /// Identifier of the underlying catalog entry
    #[must_use]
    pub fn id(&self) -> &str {
        &self.exercise.id
    }
}

impl AsRef<ExerciseDefinition> for PlannedExercise {
    fn as_ref(&self) -> &ExerciseDefinition {
        &self.exercise
    }
}

impl From<ExerciseDefinition> for PlannedExercise {
    fn from(exercise: ExerciseDefinition) -> Self {
        Self::from_definition(exercise, &SessionDefaults::default())
    }
}
