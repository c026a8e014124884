// ABOUTME: Engine-wide constants for workout plan synthesis
// ABOUTME: Time-per-set, session defaults, difficulty thresholds, and movement muscle lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Default values used by the engine configuration.
//!
//! These are the baseline numbers; every one of them can be overridden through
//! the engine's `PlannerConfig`.

/// Session timing constants
pub mod timing {
    /// Assumed working time for a single set, in seconds
    pub const SECONDS_PER_SET: f64 = 45.0;

    /// Rest between sets when a planned exercise has no explicit rest time
    pub const DEFAULT_REST_SECONDS: u32 = 60;

    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
}

/// Defaults applied when a catalog entry becomes a planned exercise
pub mod session_defaults {
    /// Default number of sets
    pub const TARGET_SETS: u32 = 3;

    /// Default number of repetitions per set
    pub const TARGET_REPS: u32 = 10;

    /// Default rest between sets, in seconds
    pub const REST_TIME_SECONDS: u32 = 60;
}

/// Aggregate difficulty thresholds over the mean difficulty score
pub mod difficulty {
    /// Mean score at or below which a plan is beginner
    pub const BEGINNER_MAX_MEAN: f64 = 1.3;

    /// Mean score above which a plan is advanced
    pub const ADVANCED_MIN_MEAN: f64 = 2.3;
}

/// Muscle-group vocabularies for movement classification
pub mod movement {
    /// Muscle groups that mark an exercise as a pushing movement
    pub const PUSH_MUSCLES: &[&str] = &["chest", "shoulders", "triceps", "quadriceps"];

    /// Muscle groups that mark an exercise as a pulling movement
    pub const PULL_MUSCLES: &[&str] = &["back", "biceps", "hamstrings", "glutes"];

    /// Substrings that mark a muscle group as core
    pub const CORE_KEYWORDS: &[&str] = &["abs", "core"];

    /// Largest push/pull difference still considered balanced
    pub const MAX_IMBALANCE: u32 = 1;
}

/// Greedy selector tuning
pub mod selection {
    /// Number of exercises admitted unconditionally at the start of a plan
    pub const BOOTSTRAP_COUNT: usize = 2;

    /// Minimum selected exercises before a core exercise is prioritized
    pub const CORE_MIN_SELECTED: usize = 2;
}

/// Advisor thresholds
pub mod advisor {
    /// Plans at least this long should contain a core exercise
    pub const CORE_CHECK_MIN_EXERCISES: usize = 4;

    /// Plans at least this long should mix difficulty levels
    pub const DIFFICULTY_MIX_MIN_EXERCISES: usize = 3;
}
