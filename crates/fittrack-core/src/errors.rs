// ABOUTME: Unified error type and error codes for FitTrack calculations and formatting
// ABOUTME: Maps input-contract violations to stable codes with serializable responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! # Unified Error Handling System
//!
//! Every fallible FitTrack operation returns [`AppResult`]. Degenerate numeric
//! inputs (zero height, reps outside the formula domain, a zero baseline) are
//! rejected with an [`AppError`] instead of leaking `NaN` or infinity to
//! presentation code.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Standard error codes used throughout the library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Argument is malformed (NaN, unknown enum name)
    InvalidInput = 3000,
    /// Argument is well-formed but outside the accepted domain
    ValueOutOfRange = 3003,
    /// Date input could not be parsed or is out of range
    InvalidDate = 3004,

    // Configuration (6000-6999)
    /// Environment configuration is invalid
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    InternalError = 9000,
}

impl ErrorCode {
    /// Stable numeric value of this code
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvalidDate => "The provided date is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::InvalidDate => "INVALID_DATE",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::InternalError => "INTERNAL_ERROR",
        };
        f.write_str(name)
    }
}

/// Unified error type for the library
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {message}", .code.description())]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Malformed argument
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Argument outside the accepted domain
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Unparsable or unrepresentable date
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidDate, message)
    }

    /// Invalid configuration value
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Serializable error payload for presentation code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            code: error.code,
            message: error.message,
        }
    }
}

/// Reject non-finite values with a named argument in the message
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` when `value` is `NaN` or infinite
pub fn require_finite(name: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!(argument = name, value, "rejected non-finite input");
        Err(AppError::invalid_input(format!(
            "{name} must be a finite number, got {value}"
        )))
    }
}

/// Reject negative or non-finite values
///
/// # Errors
///
/// Returns `ErrorCode::InvalidInput` for non-finite values and
/// `ErrorCode::ValueOutOfRange` for negative values
pub fn require_non_negative(name: &str, value: f64) -> AppResult<f64> {
    let value = require_finite(name, value)?;
    if value < 0.0 {
        debug!(argument = name, value, "rejected negative input");
        return Err(AppError::out_of_range(format!(
            "{name} must not be negative, got {value}"
        )));
    }
    Ok(value)
}

/// Reject a computed result that left the finite range
///
/// Finite inputs can still overflow (a tiny height, a huge weight), so
/// calculations pass their result through here before returning it.
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` when `value` is `NaN` or infinite
pub fn require_finite_result(name: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        debug!(result = name, value, "rejected non-finite result");
        Err(AppError::out_of_range(format!(
            "{name} result {value} exceeds the representable range"
        )))
    }
}
