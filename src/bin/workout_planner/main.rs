// ABOUTME: workout-planner CLI - generate balanced workout plans from an exercise catalog
// ABOUTME: Lists and filters the catalog, generates plans, and analyzes saved plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List the built-in catalog with movement tags
//! workout-planner catalog
//!
//! # Filter a catalog snapshot
//! workout-planner filter --catalog exercises.yaml --difficulty beginner --body-part back
//!
//! # Generate a 30-minute upper body plan as JSON
//! workout-planner generate --duration 30 --body-part chest --body-part back --format json
//!
//! # Review a saved plan
//! workout-planner analyze --plan plan.json
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use pierre_workout_planner::engine::WorkoutEngine;
use pierre_workout_planner::errors::{AppError, ErrorResponse};
use pierre_workout_planner::logging::LoggingConfig;
use pierre_workout_planner::models::DifficultyLevel;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use helpers::display::{print_json, OutputFormat};
use helpers::inputs::load_config;

#[derive(Parser)]
#[command(
    name = "workout-planner",
    about = "Pierre Workout Planner CLI",
    long_about = "Builds time-boxed, push/pull balanced workout plans from an exercise catalog and reviews existing plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Planner configuration file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog entries with their movement tags
    Catalog {
        /// Catalog snapshot (JSON or YAML); defaults to the built-in catalog
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show the catalog entries that pass the difficulty and body-part filters
    Filter {
        /// Catalog snapshot (JSON or YAML); defaults to the built-in catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Difficulty constraint (beginner, intermediate, advanced)
        #[arg(long)]
        difficulty: Option<DifficultyLevel>,

        /// Target body part (repeatable)
        #[arg(long = "body-part")]
        body_parts: Vec<String>,
    },

    /// Generate a workout plan
    Generate {
        /// Catalog snapshot (JSON or YAML); defaults to the built-in catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Target session length in minutes
        #[arg(long)]
        duration: f64,

        /// Difficulty constraint (beginner, intermediate, advanced)
        #[arg(long)]
        difficulty: Option<DifficultyLevel>,

        /// Target body part (repeatable)
        #[arg(long = "body-part")]
        body_parts: Vec<String>,

        /// Maximum number of exercises
        #[arg(long)]
        count: Option<usize>,

        /// Plan name
        #[arg(long, default_value = "Generated Workout")]
        name: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Analyze the balance of a saved plan
    Analyze {
        /// Serialized `WorkoutPlan` (JSON or YAML)
        #[arg(long)]
        plan: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Command {
    /// Format used for results and for error reports
    const fn output_format(&self) -> OutputFormat {
        match self {
            Self::Generate { format, .. } | Self::Analyze { format, .. } => *format,
            Self::Catalog { .. } | Self::Filter { .. } => OutputFormat::Text,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.command.output_format();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_failure(error, format),
    }
}

/// Print a failure and map it to the process exit code of its error class
fn report_failure(error: anyhow::Error, format: OutputFormat) -> ExitCode {
    match error.downcast::<AppError>() {
        Ok(error) => {
            eprintln!("Error: {error}");
            let code = error.code.exit_code();
            if format == OutputFormat::Json {
                if let Err(e) = print_json(&ErrorResponse::from(error)) {
                    eprintln!("Error: {e}");
                }
            }
            ExitCode::from(code)
        }
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "Planner configuration loaded");
    let engine = WorkoutEngine::with_config(config);

    match cli.command {
        Command::Catalog { catalog } => {
            commands::catalog::list(&engine, catalog.as_deref())?;
        }
        Command::Filter {
            catalog,
            difficulty,
            body_parts,
        } => {
            commands::catalog::filter(&engine, catalog.as_deref(), difficulty, &body_parts)?;
        }
        Command::Generate {
            catalog,
            duration,
            difficulty,
            body_parts,
            count,
            name,
            format,
        } => {
            let options = commands::plan::GenerateOptions {
                duration,
                difficulty,
                body_parts,
                count,
                name,
                format,
            };
            commands::plan::generate(&engine, catalog.as_deref(), options)?;
        }
        Command::Analyze { plan, format } => {
            commands::plan::analyze(&engine, &plan, format)?;
        }
    }

    Ok(())
}
