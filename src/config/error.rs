// ABOUTME: Configuration error types for planning configuration loading and validation
// ABOUTME: Covers range violations, allocation weights, and environment parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env::VarError;

use thiserror::Error;

use crate::errors::{AppError, ErrorCode};

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A lower bound is not below its upper bound
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A required field is absent
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] VarError),

    /// Environment variable could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Slot allocation shares do not form a valid distribution
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Single value outside its accepted range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let code = match error {
            ConfigError::EnvVar(_) | ConfigError::Parse(_) | ConfigError::MissingField(_) => {
                ErrorCode::ConfigError
            }
            ConfigError::InvalidRange(_)
            | ConfigError::InvalidWeights(_)
            | ConfigError::ValueOutOfRange(_) => ErrorCode::ConfigInvalid,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
