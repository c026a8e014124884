// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Input resolution helpers for workout-planner
// ABOUTME: Loads the planner configuration and picks the catalog source

use pierre_workout_planner::catalog::{default_catalog, load_catalog};
use pierre_workout_planner::engine::PlannerConfig;
use pierre_workout_planner::errors::{AppError, AppResult};
use pierre_workout_planner::logging::PlannerLogger;
use pierre_workout_planner::models::ExerciseDefinition;
use std::fs;
use std::path::Path;

/// Configuration from `--config`, or defaults plus environment overrides
pub fn load_config(path: Option<&Path>) -> AppResult<PlannerConfig> {
    let config = match path {
        Some(path) => {
            let yaml = fs::read_to_string(path).map_err(|e| {
                AppError::storage(format!("Failed to read {}: {e}", path.display()))
                    .with_source(e)
            })?;
            PlannerConfig::from_yaml_str(&yaml)?
        }
        None => PlannerConfig::load()?,
    };
    Ok(config)
}

/// Catalog from `--catalog`, or the built-in starter catalog
pub fn resolve_catalog(path: Option<&Path>) -> AppResult<Vec<ExerciseDefinition>> {
    let (source, catalog) = match path {
        Some(path) => (path.display().to_string(), load_catalog(path)?),
        None => ("built-in".to_owned(), default_catalog()),
    };
    PlannerLogger::log_catalog_source(&source, catalog.len());
    Ok(catalog)
}
