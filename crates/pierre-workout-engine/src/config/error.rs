// ABOUTME: Configuration error types for planner configuration validation
// ABOUTME: Defines error variants for invalid ranges, env parsing, and YAML loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for planner configuration validation.

use pierre_workout_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds in the wrong order (e.g., beginner above advanced)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required list is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse an environment override
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// YAML document could not be deserialized
    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}
