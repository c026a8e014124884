// ABOUTME: Planner configuration for classification, estimation, selection, and advice
// ABOUTME: Domain sections with defaults, environment overrides, YAML loading, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration
//!
//! Every tunable number of the engine lives here. The engine never reads the
//! environment itself: callers build a [`PlannerConfig`] (defaults, YAML, or
//! [`PlannerConfig::load`]) and hand it to `WorkoutEngine::with_config`.

pub mod error;

pub use error::ConfigError;

use pierre_workout_core::constants::{advisor, difficulty, movement, selection, timing};
use pierre_workout_core::models::SessionDefaults;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main planner configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Movement classification vocabularies
    pub balance: BalanceConfig,
    /// Aggregate difficulty thresholds
    pub difficulty: DifficultyThresholds,
    /// Duration estimation constants
    pub duration: DurationConfig,
    /// Greedy selector tuning
    pub selector: SelectorConfig,
    /// Advisor thresholds and messages
    pub advisor: AdvisorConfig,
    /// Sets/reps/rest applied to newly planned exercises
    pub session_defaults: SessionDefaults,
}

/// Muscle-group vocabularies for push/pull/core tagging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Exact (case-insensitive) muscle tags that mark a push movement
    pub push_muscles: Vec<String>,
    /// Exact (case-insensitive) muscle tags that mark a pull movement
    pub pull_muscles: Vec<String>,
    /// Substrings that mark a muscle tag as core
    pub core_keywords: Vec<String>,
    /// Largest push/pull difference still reported as balanced
    pub max_imbalance: u32,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            push_muscles: to_owned_list(movement::PUSH_MUSCLES),
            pull_muscles: to_owned_list(movement::PULL_MUSCLES),
            core_keywords: to_owned_list(movement::CORE_KEYWORDS),
            max_imbalance: movement::MAX_IMBALANCE,
        }
    }
}

/// Mean-score thresholds for plan difficulty
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyThresholds {
    /// Mean at or below this is beginner
    pub beginner_max_mean: f64,
    /// Mean above this is advanced
    pub advanced_min_mean: f64,
}

impl Default for DifficultyThresholds {
    fn default() -> Self {
        Self {
            beginner_max_mean: difficulty::BEGINNER_MAX_MEAN,
            advanced_min_mean: difficulty::ADVANCED_MIN_MEAN,
        }
    }
}

/// Constants of the closed-form duration estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationConfig {
    /// Working time per set, in seconds
    pub seconds_per_set: f64,
    /// Rest substituted when a planned exercise has none
    pub default_rest_seconds: u32,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            seconds_per_set: timing::SECONDS_PER_SET,
            default_rest_seconds: timing::DEFAULT_REST_SECONDS,
        }
    }
}

/// Greedy selector tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Exercises admitted unconditionally before balance tracking engages
    pub bootstrap_count: usize,
    /// Exercises required before the first core exercise gets priority
    pub core_min_selected: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            bootstrap_count: selection::BOOTSTRAP_COUNT,
            core_min_selected: selection::CORE_MIN_SELECTED,
        }
    }
}

/// Advisor thresholds and display messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Plans with at least this many exercises should contain core work
    pub core_check_min_exercises: usize,
    /// Plans with at least this many exercises should mix difficulty levels
    pub difficulty_mix_min_exercises: usize,
    /// Suggestion texts
    pub messages: AdvisorMessages,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            core_check_min_exercises: advisor::CORE_CHECK_MIN_EXERCISES,
            difficulty_mix_min_exercises: advisor::DIFFICULTY_MIX_MIN_EXERCISES,
            messages: AdvisorMessages::default(),
        }
    }
}

/// Template messages for balance suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorMessages {
    /// Shown when pushing dominates
    pub add_pulling: String,
    /// Shown when pulling dominates
    pub add_pushing: String,
    /// Shown when a longer plan has no core work
    pub add_core: String,
    /// Shown when difficulty levels are not mixed
    pub mix_difficulty: String,
}

impl Default for AdvisorMessages {
    fn default() -> Self {
        Self {
            add_pulling: "Add more pulling exercises (back, biceps) to balance your pushing work"
                .into(),
            add_pushing: "Add more pushing exercises (chest, shoulders, triceps) to balance your pulling work"
                .into(),
            add_core: "Add at least one core exercise for trunk stability".into(),
            mix_difficulty: "Mix difficulty levels: pair foundational movements with more challenging ones"
                .into(),
        }
    }
}

impl PlannerConfig {
    /// Load defaults, apply environment overrides, and validate
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document, apply environment overrides, and validate
    ///
    /// Missing sections fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, an override is invalid, or validation fails
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        let config = config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.duration.seconds_per_set.is_finite() && self.duration.seconds_per_set > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "seconds_per_set must be a positive number",
            ));
        }

        if self.session_defaults.target_sets == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "session_defaults.target_sets must be at least 1",
            ));
        }
        if self.session_defaults.target_reps == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "session_defaults.target_reps must be at least 1",
            ));
        }

        if self.difficulty.beginner_max_mean >= self.difficulty.advanced_min_mean {
            return Err(ConfigError::InvalidRange(
                "beginner_max_mean must be < advanced_min_mean",
            ));
        }

        if self.balance.push_muscles.is_empty() {
            return Err(ConfigError::MissingField("balance.push_muscles"));
        }
        if self.balance.pull_muscles.is_empty() {
            return Err(ConfigError::MissingField("balance.pull_muscles"));
        }
        if self.balance.core_keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::MissingField("balance.core_keywords"));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("PLANNER_SECONDS_PER_SET", &mut self.duration.seconds_per_set)?;
        Self::apply_env_var(
            "PLANNER_DEFAULT_REST_SECONDS",
            &mut self.duration.default_rest_seconds,
        )?;
        Self::apply_env_var(
            "PLANNER_DEFAULT_SETS",
            &mut self.session_defaults.target_sets,
        )?;
        Self::apply_env_var(
            "PLANNER_DEFAULT_REPS",
            &mut self.session_defaults.target_reps,
        )?;
        Self::apply_env_var("PLANNER_MAX_IMBALANCE", &mut self.balance.max_imbalance)?;
        Self::apply_env_var(
            "PLANNER_BOOTSTRAP_COUNT",
            &mut self.selector.bootstrap_count,
        )?;
        Ok(self)
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|&s| s.to_owned()).collect()
}
