// ABOUTME: Push/pull/core movement classification and aggregate difficulty scoring
// ABOUTME: Multi-label tagging via bitflags; tag-overlap counts over exercise lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Balance Classifier
//!
//! Classification is a tagging problem, not a partition: a squat tagged with
//! `quadriceps` and `glutes` is both a push and a pull movement. Counts built
//! from these tags may therefore sum to more than the number of exercises.

use crate::config::{BalanceConfig, DifficultyThresholds};
use pierre_workout_core::models::{DifficultyLevel, ExerciseDefinition};
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Movement pattern tags of a single exercise
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct MovementTags: u8 {
        /// Works a pushing muscle group
        const PUSH = 0b0000_0001;
        /// Works a pulling muscle group
        const PULL = 0b0000_0010;
        /// Works the trunk
        const CORE = 0b0000_0100;
    }
}

impl MovementTags {
    /// Check if the exercise counts as a push movement
    #[must_use]
    pub const fn is_push(&self) -> bool {
        self.contains(Self::PUSH)
    }

    /// Check if the exercise counts as a pull movement
    #[must_use]
    pub const fn is_pull(&self) -> bool {
        self.contains(Self::PULL)
    }

    /// Check if the exercise counts as core work
    #[must_use]
    pub const fn is_core(&self) -> bool {
        self.contains(Self::CORE)
    }

    /// Lowercase tag names in push, pull, core order
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        [
            (Self::PUSH, "push"),
            (Self::PULL, "pull"),
            (Self::CORE, "core"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, label)| label)
        .collect()
    }
}

/// Tag-overlap counts over a list of exercises
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementCounts {
    /// Exercises tagged push
    pub push: u32,
    /// Exercises tagged pull
    pub pull: u32,
    /// Exercises tagged core
    pub core: u32,
}

impl MovementCounts {
    /// Add one exercise's tags to the counts
    pub fn record(&mut self, tags: MovementTags) {
        if tags.is_push() {
            self.push += 1;
        }
        if tags.is_pull() {
            self.pull += 1;
        }
        if tags.is_core() {
            self.core += 1;
        }
    }

    /// Absolute push/pull difference
    #[must_use]
    pub const fn imbalance(&self) -> u32 {
        self.push.abs_diff(self.pull)
    }
}

/// Classifies exercises using a configured muscle vocabulary
#[derive(Debug, Clone)]
pub struct MovementClassifier {
    push_muscles: Vec<String>,
    pull_muscles: Vec<String>,
    core_keywords: Vec<String>,
}

impl Default for MovementClassifier {
    fn default() -> Self {
        Self::new(&BalanceConfig::default())
    }
}

impl MovementClassifier {
    /// Build a classifier, normalizing the vocabulary to lowercase
    #[must_use]
    pub fn new(config: &BalanceConfig) -> Self {
        Self {
            push_muscles: normalize_all(&config.push_muscles),
            pull_muscles: normalize_all(&config.pull_muscles),
            core_keywords: normalize_all(&config.core_keywords),
        }
    }

    /// Tag a single exercise
    ///
    /// Push and pull require an exact (case-insensitive) muscle tag match,
    /// core matches any tag containing one of the core keywords. An exercise
    /// without muscle groups gets no tags.
    #[must_use]
    pub fn classify(&self, exercise: &ExerciseDefinition) -> MovementTags {
        let mut tags = MovementTags::empty();

        for muscle in &exercise.muscle_groups {
            let muscle = normalize(muscle);
            if muscle.is_empty() {
                continue;
            }
            if self.push_muscles.contains(&muscle) {
                tags |= MovementTags::PUSH;
            }
            if self.pull_muscles.contains(&muscle) {
                tags |= MovementTags::PULL;
            }
            if self
                .core_keywords
                .iter()
                .any(|keyword| muscle.contains(keyword.as_str()))
            {
                tags |= MovementTags::CORE;
            }
        }

        tags
    }

    /// Count tags over a list of exercises
    #[must_use]
    pub fn count<E: AsRef<ExerciseDefinition>>(&self, exercises: &[E]) -> MovementCounts {
        let mut counts = MovementCounts::default();
        for exercise in exercises {
            counts.record(self.classify(exercise.as_ref()));
        }
        counts
    }
}

/// Aggregate difficulty of a list of exercises
///
/// Scores beginner=1, intermediate=2, advanced=3 and classifies the mean.
/// An empty list is beginner.
#[must_use]
pub fn estimate_difficulty<E: AsRef<ExerciseDefinition>>(
    exercises: &[E],
    thresholds: &DifficultyThresholds,
) -> DifficultyLevel {
    if exercises.is_empty() {
        return DifficultyLevel::Beginner;
    }

    let total: u32 = exercises
        .iter()
        .map(|e| u32::from(e.as_ref().difficulty.score()))
        .sum();
    let mean = f64::from(total) / exercises.len() as f64;

    if mean <= thresholds.beginner_max_mean {
        DifficultyLevel::Beginner
    } else if mean > thresholds.advanced_min_mean {
        DifficultyLevel::Advanced
    } else {
        DifficultyLevel::Intermediate
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn normalize_all(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| normalize(v))
        .filter(|v| !v.is_empty())
        .collect()
}
