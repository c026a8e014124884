// ABOUTME: Balance advisor that inspects a plan and emits qualitative suggestions
// ABOUTME: Produces BalanceReport with push/pull/core counts and ordered advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::balance::MovementClassifier;
use crate::config::{AdvisorConfig, PlannerConfig};
use pierre_workout_core::models::{
    BalanceReport, BalanceSuggestion, DifficultyLevel, ExerciseDefinition, SuggestionKind,
};
use tracing::debug;

/// Computes balance reports for finished or partial plans
#[derive(Debug, Clone)]
pub struct BalanceAdvisor {
    classifier: MovementClassifier,
    max_imbalance: u32,
    config: AdvisorConfig,
}

impl Default for BalanceAdvisor {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

impl BalanceAdvisor {
    /// Build an advisor from the planner configuration
    #[must_use]
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            classifier: MovementClassifier::new(&config.balance),
            max_imbalance: config.balance.max_imbalance,
            config: config.advisor.clone(),
        }
    }

    /// Analyze push/pull/core balance and difficulty mix
    #[must_use]
    pub fn analyze<E: AsRef<ExerciseDefinition>>(&self, exercises: &[E]) -> BalanceReport {
        let counts = self.classifier.count(exercises);
        let messages = &self.config.messages;
        let mut suggestions = Vec::new();

        if counts.push > counts.pull.saturating_add(self.max_imbalance) {
            suggestions.push(suggestion(SuggestionKind::AddPulling, &messages.add_pulling));
        } else if counts.pull > counts.push.saturating_add(self.max_imbalance) {
            suggestions.push(suggestion(SuggestionKind::AddPushing, &messages.add_pushing));
        }

        if exercises.len() >= self.config.core_check_min_exercises && counts.core == 0 {
            suggestions.push(suggestion(SuggestionKind::AddCore, &messages.add_core));
        }

        if exercises.len() >= self.config.difficulty_mix_min_exercises && !mixes_difficulty(exercises)
        {
            suggestions.push(suggestion(
                SuggestionKind::MixDifficulty,
                &messages.mix_difficulty,
            ));
        }

        let report = BalanceReport {
            push_count: counts.push,
            pull_count: counts.pull,
            core_count: counts.core,
            is_balanced: counts.imbalance() <= self.max_imbalance,
            suggestions,
        };

        debug!(
            exercises = exercises.len(),
            push = report.push_count,
            pull = report.pull_count,
            core = report.core_count,
            balanced = report.is_balanced,
            suggestions = report.suggestions.len(),
            "Balance analyzed"
        );

        report
    }
}

/// Whether the list has a beginner exercise and a harder one
fn mixes_difficulty<E: AsRef<ExerciseDefinition>>(exercises: &[E]) -> bool {
    let has_beginner = exercises
        .iter()
        .any(|e| e.as_ref().difficulty == DifficultyLevel::Beginner);
    let has_harder = exercises
        .iter()
        .any(|e| e.as_ref().difficulty != DifficultyLevel::Beginner);
    has_beginner && has_harder
}

fn suggestion(kind: SuggestionKind, message: &str) -> BalanceSuggestion {
    BalanceSuggestion {
        kind,
        message: message.to_owned(),
    }
}
