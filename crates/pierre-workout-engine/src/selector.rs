// ABOUTME: Greedy single-pass exercise selection under balance and duration budgets
// ABOUTME: Priority policy (core, push, pull, bootstrap) evaluated in catalog order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Greedy Selector
//!
//! Walks the filtered catalog once, in order, and commits to each candidate
//! immediately. There is no backtracking: an adversarially ordered catalog can
//! yield an unbalanced or short plan, and callers should run the advisor on
//! the result. The output is fully determined by the catalog order and the
//! request, which keeps generated plans reproducible.

use crate::balance::{MovementClassifier, MovementTags};
use crate::config::{DurationConfig, PlannerConfig, SelectorConfig};
use crate::duration::estimate_definitions_duration;
use pierre_workout_core::models::{DifficultyLevel, ExerciseDefinition, SessionDefaults};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Parameters of one plan generation call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Stop once the selection reaches this many minutes
    pub target_duration_minutes: f64,
    /// Difficulty constraint for catalog filtering
    #[serde(default)]
    pub difficulty: Option<DifficultyLevel>,
    /// Requested body parts (empty means full body)
    #[serde(default)]
    pub body_parts: Vec<String>,
    /// Stop once this many exercises are selected
    #[serde(default)]
    pub target_exercise_count: Option<usize>,
}

impl GenerationRequest {
    /// Full-body request with only a duration budget
    #[must_use]
    pub const fn new(target_duration_minutes: f64) -> Self {
        Self {
            target_duration_minutes,
            difficulty: None,
            body_parts: Vec::new(),
            target_exercise_count: None,
        }
    }

    /// Set the difficulty constraint
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: DifficultyLevel) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Set the requested body parts
    #[must_use]
    pub fn with_body_parts<I, S>(mut self, body_parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body_parts = body_parts.into_iter().map(Into::into).collect();
        self
    }

    /// Set the exercise count budget
    #[must_use]
    pub fn with_exercise_count(mut self, count: usize) -> Self {
        self.target_exercise_count = Some(count);
        self
    }
}

/// Strategy that picks exercises from an already filtered candidate list
///
/// The greedy pass is the reference behavior; an optimizing solver can be
/// plugged in behind this trait without changing callers.
pub trait PlanSelector: Send + Sync {
    /// Select exercises from `candidates` (already filtered, in catalog order)
    fn select(
        &self,
        candidates: &[ExerciseDefinition],
        request: &GenerationRequest,
    ) -> Vec<ExerciseDefinition>;
}

/// Which priority rule admitted a candidate
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRule {
    /// First core exercise once enough exercises are selected
    CorePriority,
    /// Push movement while push does not lead pull
    PushBalance,
    /// Pull movement while pull does not lead push
    PullBalance,
    /// Unconditional admission while the plan is still short
    Bootstrap,
}

impl SelectionRule {
    /// Short name used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CorePriority => "core_priority",
            Self::PushBalance => "push_balance",
            Self::PullBalance => "pull_balance",
            Self::Bootstrap => "bootstrap",
        }
    }
}

/// Running balance state of one greedy pass
#[derive(Debug, Default)]
struct SelectionState {
    push_count: u32,
    pull_count: u32,
    has_core: bool,
}

/// Single-pass greedy selector
#[derive(Debug, Clone)]
pub struct GreedySelector {
    classifier: MovementClassifier,
    duration: DurationConfig,
    session_defaults: SessionDefaults,
    config: SelectorConfig,
}

impl Default for GreedySelector {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

impl GreedySelector {
    /// Build a selector from the planner configuration
    #[must_use]
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            classifier: MovementClassifier::new(&config.balance),
            duration: config.duration,
            session_defaults: config.session_defaults,
            config: config.selector,
        }
    }

    fn budget_exhausted(&self, selected: &[ExerciseDefinition], request: &GenerationRequest) -> bool {
        if let Some(count) = request.target_exercise_count {
            if selected.len() >= count {
                return true;
            }
        }
        let minutes =
            estimate_definitions_duration(selected, &self.session_defaults, &self.duration);
        minutes >= request.target_duration_minutes
    }

    /// Apply the priority policy to one candidate, updating the running state
    fn decide(
        &self,
        tags: MovementTags,
        selected_len: usize,
        state: &mut SelectionState,
    ) -> Option<SelectionRule> {
        if tags.is_core() && !state.has_core && selected_len >= self.config.core_min_selected {
            state.has_core = true;
            Some(SelectionRule::CorePriority)
        } else if tags.is_push() && state.push_count <= state.pull_count {
            state.push_count += 1;
            Some(SelectionRule::PushBalance)
        } else if tags.is_pull() && state.pull_count <= state.push_count {
            state.pull_count += 1;
            Some(SelectionRule::PullBalance)
        } else if selected_len < self.config.bootstrap_count {
            if tags.is_push() {
                state.push_count += 1;
            }
            if tags.is_pull() {
                state.pull_count += 1;
            }
            Some(SelectionRule::Bootstrap)
        } else {
            None
        }
    }
}

impl PlanSelector for GreedySelector {
    fn select(
        &self,
        candidates: &[ExerciseDefinition],
        request: &GenerationRequest,
    ) -> Vec<ExerciseDefinition> {
        let mut selected: Vec<ExerciseDefinition> = Vec::new();

        let target = request.target_duration_minutes;
        if target.is_nan() || target <= 0.0 {
            debug!(
                target_minutes = target,
                "Non-positive duration target, nothing selected"
            );
            return selected;
        }

        let mut selected_ids: HashSet<&str> = HashSet::new();
        let mut state = SelectionState::default();

        for candidate in candidates {
            if self.budget_exhausted(&selected, request) {
                break;
            }
            if selected_ids.contains(candidate.id.as_str()) {
                continue;
            }

            let tags = self.classifier.classify(candidate);
            match self.decide(tags, selected.len(), &mut state) {
                Some(rule) => {
                    debug!(
                        exercise.id = %candidate.id,
                        rule = rule.as_str(),
                        push = state.push_count,
                        pull = state.pull_count,
                        "Exercise selected"
                    );
                    selected_ids.insert(candidate.id.as_str());
                    selected.push(candidate.clone());
                }
                None => {
                    debug!(exercise.id = %candidate.id, ?tags, "Exercise skipped");
                }
            }
        }

        info!(
            candidates = candidates.len(),
            selected = selected.len(),
            push = state.push_count,
            pull = state.pull_count,
            has_core = state.has_core,
            "Greedy selection complete"
        );

        selected
    }
}
