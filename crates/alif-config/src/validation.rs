// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration validation
//!
//! This module checks that configuration values fit the pins they will be
//! driven on and that the run is well-formed.

use crate::{AlifConfig, ConfigError, ConfigResult};

/// Log levels accepted by the tracing filter
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validation errors that can occur during config validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    NibbleOutOfRange { field: String, value: u8 },
    InvalidValue { field: String, reason: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NibbleOutOfRange { field, value } => {
                write!(f, "{} = {} does not fit in 4 bits (0-15)", field, value)
            }
            Self::InvalidValue { field, reason } => {
                write!(f, "Invalid configuration value for {}: {}", field, reason)
            }
        }
    }
}

/// Validate the complete configuration
///
/// Checks for:
/// - Configuration nibbles within 0-15
/// - Non-empty run and reset phases
/// - Known log level
///
/// # Errors
///
/// Returns `ConfigError::ValidationError` listing every problem found
pub fn validate_config(config: &AlifConfig) -> ConfigResult<()> {
    let errors = collect_validation_errors(config);

    if !errors.is_empty() {
        let error_messages = errors
            .iter()
            .map(|e| format!("  - {}", e))
            .collect::<Vec<_>>()
            .join("\n");

        return Err(ConfigError::ValidationError(format!(
            "Configuration validation failed:\n{}",
            error_messages
        )));
    }

    Ok(())
}

/// Every validation problem in `config`, in a stable order
pub fn collect_validation_errors(config: &AlifConfig) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    validate_nibbles(config, &mut errors);
    validate_run_lengths(config, &mut errors);
    validate_logging(config, &mut errors);
    errors
}

fn validate_nibbles(config: &AlifConfig, errors: &mut Vec<ConfigValidationError>) {
    for (field, value) in [
        ("stimulus.leak", config.stimulus.leak),
        ("stimulus.decay", config.stimulus.decay),
    ] {
        if value > 0x0F {
            errors.push(ConfigValidationError::NibbleOutOfRange {
                field: field.to_string(),
                value,
            });
        }
    }
}

fn validate_run_lengths(config: &AlifConfig, errors: &mut Vec<ConfigValidationError>) {
    if config.simulation.cycles == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "simulation.cycles".to_string(),
            reason: "must be greater than 0".to_string(),
        });
    }

    // The chip only registers reset on a clock edge
    if config.simulation.reset_cycles == 0 {
        errors.push(ConfigValidationError::InvalidValue {
            field: "simulation.reset_cycles".to_string(),
            reason: "reset must be held for at least one cycle".to_string(),
        });
    }
}

fn validate_logging(config: &AlifConfig, errors: &mut Vec<ConfigValidationError>) {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigValidationError::InvalidValue {
            field: "logging.level".to_string(),
            reason: format!("'{}' is not one of {}", config.logging.level, LOG_LEVELS.join(", ")),
        });
    }
}
