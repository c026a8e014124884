// ABOUTME: Catalog inspection commands for workout-planner
// ABOUTME: Handles listing the catalog and previewing the difficulty/body-part filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_workout_planner::engine::WorkoutEngine;
use pierre_workout_planner::errors::AppResult;
use pierre_workout_planner::models::DifficultyLevel;
use std::path::Path;
use tracing::info;

use crate::helpers::display::display_catalog;
use crate::helpers::inputs::resolve_catalog;

/// List every catalog entry
pub fn list(engine: &WorkoutEngine, catalog: Option<&Path>) -> AppResult<()> {
    let catalog = resolve_catalog(catalog)?;
    display_catalog(engine, &catalog);
    Ok(())
}

/// List the entries that pass the filters
pub fn filter(
    engine: &WorkoutEngine,
    catalog: Option<&Path>,
    difficulty: Option<DifficultyLevel>,
    body_parts: &[String],
) -> AppResult<()> {
    let catalog = resolve_catalog(catalog)?;
    let filtered = engine.filter_catalog(&catalog, difficulty, body_parts);

    info!(
        catalog = catalog.len(),
        matched = filtered.len(),
        difficulty = difficulty.map_or("any", |d| d.as_str()),
        "Catalog filtered"
    );

    display_catalog(engine, &filtered);
    Ok(())
}
