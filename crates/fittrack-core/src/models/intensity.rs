// ABOUTME: Workout intensity levels with fixed calorie-burn multipliers
// ABOUTME: Parses from and serializes to low/medium/high
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use crate::constants::thresholds::intensity::{
    HIGH_MULTIPLIER, LOW_MULTIPLIER, MEDIUM_MULTIPLIER,
};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Perceived workout intensity
///
/// Each level maps to a fixed multiplier expressing kcal burned per kilogram
/// of body weight per hour of activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Easy effort (walking, light mobility work): multiplier 3
    Low,
    /// Moderate effort (steady cardio, circuit training): multiplier 5
    #[default]
    Medium,
    /// Hard effort (intervals, heavy lifting): multiplier 8
    High,
}

impl Intensity {
    /// Calorie multiplier for this level
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Low => LOW_MULTIPLIER,
            Self::Medium => MEDIUM_MULTIPLIER,
            Self::High => HIGH_MULTIPLIER,
        }
    }

    /// Get level name for logging and serialization
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_input(format!(
                "Unknown intensity: '{other}'. Valid options: low, medium, high"
            ))),
        }
    }
}
