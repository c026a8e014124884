// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for workout-planner
// ABOUTME: Text tables for catalogs, plans and balance reports, plus JSON output

use clap::ValueEnum;
use pierre_workout_planner::engine::{MovementTags, WorkoutEngine};
use pierre_workout_planner::errors::AppResult;
use pierre_workout_planner::models::{BalanceReport, ExerciseDefinition, WorkoutPlan};
use serde::Serialize;

/// Output format of plan and report commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn tags_label(tags: MovementTags) -> String {
    let labels = tags.labels();
    if labels.is_empty() {
        "-".to_owned()
    } else {
        labels.join("+")
    }
}

/// Print catalog entries with difficulty, tags and muscle groups
pub fn display_catalog(engine: &WorkoutEngine, exercises: &[ExerciseDefinition]) {
    println!(
        "{:<22} {:<28} {:<13} {:<15} MUSCLE GROUPS",
        "ID", "NAME", "DIFFICULTY", "TAGS"
    );
    println!("{}", "=".repeat(100));
    for exercise in exercises {
        println!(
            "{:<22} {:<28} {:<13} {:<15} {}",
            exercise.id,
            exercise.name,
            exercise.difficulty.as_str(),
            tags_label(engine.classify_exercise(exercise)),
            exercise.muscle_groups.join(", ")
        );
    }
    println!("\n{} exercises", exercises.len());
}

/// Print a plan in execution order
pub fn display_plan(engine: &WorkoutEngine, plan: &WorkoutPlan) {
    println!("\n{}", plan.name);
    println!("{}", "=".repeat(80));
    if !plan.description.is_empty() {
        println!("{}", plan.description);
    }
    if !plan.target_body_parts.is_empty() {
        println!("Body parts: {}", plan.target_body_parts.join(", "));
    }
    println!(
        "Estimated duration: {:.1} min   Difficulty: {}",
        plan.estimated_duration_minutes, plan.difficulty
    );
    println!();

    for (index, planned) in plan.exercises.iter().enumerate() {
        let rest = planned
            .rest_time_seconds
            .unwrap_or(engine.config().duration.default_rest_seconds);
        println!(
            "{:>2}. {:<28} {} x {:<3} rest {:>3}s  [{}]",
            index + 1,
            planned.exercise.name,
            planned.target_sets,
            planned.target_reps,
            rest,
            tags_label(engine.classify_exercise(&planned.exercise))
        );
    }

    if plan.is_empty() {
        println!("(no exercises matched the request)");
    }
}

/// Print a balance report with its suggestions
pub fn display_report(report: &BalanceReport) {
    println!("\nBalance");
    println!("{}", "-".repeat(80));
    println!(
        "Push: {}   Pull: {}   Core: {}   Balanced: {}",
        report.push_count,
        report.pull_count,
        report.core_count,
        if report.is_balanced { "yes" } else { "no" }
    );

    if report.suggestions.is_empty() {
        println!("No suggestions");
    } else {
        println!("Suggestions:");
        for suggestion in &report.suggestions {
            println!("  • {}", suggestion.message);
        }
    }
}
