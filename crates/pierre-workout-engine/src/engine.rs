// ABOUTME: WorkoutEngine facade wiring filter, classifier, estimator, selector and advisor
// ABOUTME: Holds an explicit PlannerConfig and exposes plan generation, analysis and editing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout Engine
//!
//! Single entry point for callers that do not want to assemble the individual
//! components. Every component is built from the same [`PlannerConfig`], which
//! the caller passes in explicitly.

use crate::advisor::BalanceAdvisor;
use crate::balance::{self, MovementClassifier, MovementCounts, MovementTags};
use crate::catalog_filter;
use crate::config::PlannerConfig;
use crate::duration;
use crate::plan_editor::{PlanAction, PlanEditor};
use crate::selector::{GenerationRequest, GreedySelector, PlanSelector};
use pierre_workout_core::errors::AppResult;
use pierre_workout_core::models::{
    BalanceReport, DifficultyLevel, ExerciseDefinition, PlannedExercise, WorkoutPlan,
};
use rayon::prelude::*;
use std::fmt;
use tracing::info;

/// Facade over the planning pipeline
pub struct WorkoutEngine {
    config: PlannerConfig,
    classifier: MovementClassifier,
    selector: Box<dyn PlanSelector>,
    advisor: BalanceAdvisor,
    editor: PlanEditor,
}

impl fmt::Debug for WorkoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkoutEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for WorkoutEngine {
    fn default() -> Self {
        Self::with_config(PlannerConfig::default())
    }
}

impl WorkoutEngine {
    /// Build an engine using the greedy selector
    #[must_use]
    pub fn with_config(config: PlannerConfig) -> Self {
        let selector = Box::new(GreedySelector::from_config(&config));
        Self {
            classifier: MovementClassifier::new(&config.balance),
            advisor: BalanceAdvisor::from_config(&config),
            editor: PlanEditor::from_config(&config),
            selector,
            config,
        }
    }

    /// Replace the selection strategy
    #[must_use]
    pub fn with_selector(mut self, selector: Box<dyn PlanSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan editor bound to this engine's configuration
    #[must_use]
    pub const fn editor(&self) -> &PlanEditor {
        &self.editor
    }

    /// Narrow the catalog by difficulty and body parts
    #[must_use]
    pub fn filter_catalog<S: AsRef<str>>(
        &self,
        catalog: &[ExerciseDefinition],
        difficulty: Option<DifficultyLevel>,
        body_parts: &[S],
    ) -> Vec<ExerciseDefinition> {
        catalog_filter::filter_catalog(catalog, difficulty, body_parts)
    }

    /// Push/pull/core tags of one exercise
    #[must_use]
    pub fn classify_exercise(&self, exercise: &ExerciseDefinition) -> MovementTags {
        self.classifier.classify(exercise)
    }

    /// Tag-overlap movement counts of a list
    #[must_use]
    pub fn count_movements<E: AsRef<ExerciseDefinition>>(&self, exercises: &[E]) -> MovementCounts {
        self.classifier.count(exercises)
    }

    /// Estimated minutes of a list of planned exercises
    #[must_use]
    pub fn estimate_duration(&self, exercises: &[PlannedExercise]) -> f64 {
        duration::estimate_duration(exercises, &self.config.duration)
    }

    /// Aggregate difficulty of a list
    #[must_use]
    pub fn estimate_difficulty<E: AsRef<ExerciseDefinition>>(&self, exercises: &[E]) -> DifficultyLevel {
        balance::estimate_difficulty(exercises, &self.config.difficulty)
    }

    /// Filter the catalog and select exercises for one request
    #[must_use]
    pub fn generate(
        &self,
        catalog: &[ExerciseDefinition],
        request: &GenerationRequest,
    ) -> Vec<ExerciseDefinition> {
        let candidates = self.filter_catalog(catalog, request.difficulty, &request.body_parts);
        self.selector.select(&candidates, request)
    }

    /// Positional form of [`Self::generate`]
    #[must_use]
    pub fn generate_plan<S: AsRef<str>>(
        &self,
        catalog: &[ExerciseDefinition],
        target_duration_minutes: f64,
        difficulty: Option<DifficultyLevel>,
        body_parts: &[S],
        target_exercise_count: Option<usize>,
    ) -> Vec<ExerciseDefinition> {
        let request = GenerationRequest {
            target_duration_minutes,
            difficulty,
            body_parts: body_parts.iter().map(|p| p.as_ref().to_owned()).collect(),
            target_exercise_count,
        };
        self.generate(catalog, &request)
    }

    /// Run independent requests in parallel; output order matches `requests`
    #[must_use]
    pub fn generate_batch(
        &self,
        catalog: &[ExerciseDefinition],
        requests: &[GenerationRequest],
    ) -> Vec<Vec<ExerciseDefinition>> {
        let plans: Vec<Vec<ExerciseDefinition>> = requests
            .par_iter()
            .map(|request| self.generate(catalog, request))
            .collect();
        info!(requests = requests.len(), "Batch generation complete");
        plans
    }

    /// Generate exercises and wrap them in a plan with derived fields
    #[must_use]
    pub fn build_plan(
        &self,
        name: impl Into<String>,
        catalog: &[ExerciseDefinition],
        request: &GenerationRequest,
    ) -> WorkoutPlan {
        let exercises = self.generate(catalog, request);
        let description = format!(
            "Generated {}-minute session with {} exercises",
            request.target_duration_minutes,
            exercises.len()
        );
        self.editor
            .from_generated(name, description, request.body_parts.clone(), exercises)
    }

    /// Balance report with ordered suggestions
    #[must_use]
    pub fn analyze_balance<E: AsRef<ExerciseDefinition>>(&self, exercises: &[E]) -> BalanceReport {
        self.advisor.analyze(exercises)
    }

    /// Apply one edit to a plan
    ///
    /// # Errors
    ///
    /// See [`PlanEditor::apply`]
    pub fn apply_action(&self, plan: WorkoutPlan, action: PlanAction) -> AppResult<WorkoutPlan> {
        self.editor.apply(plan, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_workout_core::models::ExerciseCategory;

    fn catalog() -> Vec<ExerciseDefinition> {
        vec![
            ExerciseDefinition::new(
                "push-up",
                "Push-up",
                ExerciseCategory::Strength,
                &["chest", "triceps"],
                DifficultyLevel::Beginner,
            ),
            ExerciseDefinition::new(
                "squat",
                "Squat",
                ExerciseCategory::Strength,
                &["quadriceps", "glutes"],
                DifficultyLevel::Beginner,
            ),
            ExerciseDefinition::new(
                "pull-up",
                "Pull-up",
                ExerciseCategory::Strength,
                &["back", "biceps"],
                DifficultyLevel::Intermediate,
            ),
        ]
    }

    struct FirstOnly;

    impl PlanSelector for FirstOnly {
        fn select(
            &self,
            candidates: &[ExerciseDefinition],
            _request: &GenerationRequest,
        ) -> Vec<ExerciseDefinition> {
            candidates.iter().take(1).cloned().collect()
        }
    }

    #[test]
    fn test_generate_plan_selects_balanced_trio() {
        let engine = WorkoutEngine::default();
        let selected = engine.generate_plan(
            &catalog(),
            45.0,
            Some(DifficultyLevel::Intermediate),
            &[] as &[&str],
            None,
        );
        assert_eq!(selected.len(), 3);
        assert!(engine.analyze_balance(&selected).suggestions.is_empty());
    }

    #[test]
    fn test_custom_selector_is_used() {
        let engine = WorkoutEngine::default().with_selector(Box::new(FirstOnly));
        let selected = engine.generate(&catalog(), &GenerationRequest::new(45.0));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, "push-up");
    }

    #[test]
    fn test_batch_preserves_request_order() {
        let engine = WorkoutEngine::default();
        let requests = vec![
            GenerationRequest::new(45.0),
            GenerationRequest::new(45.0).with_exercise_count(1),
            GenerationRequest::new(0.0),
        ];
        let plans = engine.generate_batch(&catalog(), &requests);
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].len(), 3);
        assert_eq!(plans[1].len(), 1);
        assert!(plans[2].is_empty());
    }

    #[test]
    fn test_count_movements_counts_tag_overlaps() {
        let engine = WorkoutEngine::default();
        let counts = engine.count_movements(&catalog());
        // squat is tagged push and pull
        assert_eq!(counts, MovementCounts { push: 2, pull: 2, core: 0 });

        let plan = engine.build_plan("Full body", &catalog(), &GenerationRequest::new(45.0));
        assert_eq!(engine.count_movements(&plan.exercises), counts);
    }

    #[test]
    fn test_build_plan_derives_fields() {
        let engine = WorkoutEngine::default();
        let plan = engine.build_plan("Full body", &catalog(), &GenerationRequest::new(45.0));
        assert_eq!(plan.len(), 3);
        assert!((plan.estimated_duration_minutes - 12.75).abs() < 1e-9);
        assert_eq!(plan.difficulty, DifficultyLevel::Intermediate);
    }
}
