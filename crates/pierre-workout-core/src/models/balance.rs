// ABOUTME: Balance report produced by the advisor for a set of exercises
// ABOUTME: Push/pull/core counts, balance flag, and ordered suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// What a balance suggestion asks the user to change
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Too many pushing movements
    AddPulling,
    /// Too many pulling movements
    AddPushing,
    /// No core work in a longer plan
    AddCore,
    /// All exercises sit at one end of the difficulty range
    MixDifficulty,
}

/// A single advisory message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSuggestion {
    /// Suggestion category
    pub kind: SuggestionKind,
    /// Display text
    pub message: String,
}

/// Derived, non-persisted balance analysis of a plan
///
/// Counts are tag-overlap counts: an exercise tagged both push and pull
/// increments both, so the counts may sum to more than the exercise count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    /// Exercises tagged as pushing
    pub push_count: u32,
    /// Exercises tagged as pulling
    pub pull_count: u32,
    /// Exercises tagged as core
    pub core_count: u32,
    /// Push and pull counts are within the allowed imbalance
    pub is_balanced: bool,
    /// Suggestions in display order
    pub suggestions: Vec<BalanceSuggestion>,
}

impl BalanceReport {
    /// Whether the report contains a suggestion of the given kind
    #[must_use]
    pub fn has_suggestion(&self, kind: SuggestionKind) -> bool {
        self.suggestions.iter().any(|s| s.kind == kind)
    }

    /// Kind of the first suggestion, if any
    #[must_use]
    pub fn first_suggestion(&self) -> Option<SuggestionKind> {
        self.suggestions.first().map(|s| s.kind)
    }
}
