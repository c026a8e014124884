// ABOUTME: Plan commands for workout-planner
// ABOUTME: Handles plan generation from a catalog and balance analysis of saved plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_workout_planner::catalog::load_plan;
use pierre_workout_planner::engine::{GenerationRequest, WorkoutEngine};
use pierre_workout_planner::errors::AppResult;
use pierre_workout_planner::logging::PlannerLogger;
use pierre_workout_planner::models::{BalanceReport, DifficultyLevel, WorkoutPlan};
use serde::Serialize;
use std::path::Path;

use crate::helpers::display::{display_plan, display_report, print_json, OutputFormat};
use crate::helpers::inputs::resolve_catalog;

/// Arguments of the generate command
pub struct GenerateOptions {
    pub duration: f64,
    pub difficulty: Option<DifficultyLevel>,
    pub body_parts: Vec<String>,
    pub count: Option<usize>,
    pub name: String,
    pub format: OutputFormat,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanOutput<'a> {
    plan: &'a WorkoutPlan,
    balance: &'a BalanceReport,
}

fn emit(
    engine: &WorkoutEngine,
    plan: &WorkoutPlan,
    report: &BalanceReport,
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(&PlanOutput {
            plan,
            balance: report,
        })?,
        OutputFormat::Text => {
            display_plan(engine, plan);
            display_report(report);
        }
    }
    Ok(())
}

/// Generate a plan and print it with its balance report
pub fn generate(
    engine: &WorkoutEngine,
    catalog: Option<&Path>,
    options: GenerateOptions,
) -> AppResult<()> {
    let catalog = resolve_catalog(catalog)?;

    let mut request =
        GenerationRequest::new(options.duration).with_body_parts(options.body_parts);
    request.difficulty = options.difficulty;
    request.target_exercise_count = options.count;

    let plan = engine.build_plan(options.name, &catalog, &request);
    let report = engine.analyze_balance(&plan.exercises);

    PlannerLogger::log_plan_generated(
        &plan.id.to_string(),
        plan.len(),
        plan.estimated_duration_minutes,
        report.is_balanced,
    );

    emit(engine, &plan, &report, options.format)
}

/// Analyze a saved plan; derived fields are recomputed before printing
pub fn analyze(engine: &WorkoutEngine, path: &Path, format: OutputFormat) -> AppResult<()> {
    let plan = engine.editor().refresh(load_plan(path)?);
    let report = engine.analyze_balance(&plan.exercises);
    emit(engine, &plan, &report, format)
}
