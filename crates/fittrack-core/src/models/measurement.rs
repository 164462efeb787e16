// ABOUTME: Weight units recorded by users and conversion to kilograms
// ABOUTME: Calculations take kilograms; imperial entries convert at the boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use crate::constants::units::KG_PER_POUND;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a body or load weight was recorded in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Kilograms (calculation unit)
    #[default]
    Kilograms,
    /// International avoirdupois pounds
    Pounds,
}

impl WeightUnit {
    /// Convert a value in this unit to kilograms
    #[must_use]
    pub fn to_kilograms(self, value: f64) -> f64 {
        match self {
            Self::Kilograms => value,
            Self::Pounds => value * KG_PER_POUND,
        }
    }

    /// Convert a value in kilograms to this unit
    #[must_use]
    pub fn from_kilograms(self, kilograms: f64) -> f64 {
        match self {
            Self::Kilograms => kilograms,
            Self::Pounds => kilograms / KG_PER_POUND,
        }
    }

    /// Unit symbol
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Kilograms => "kg",
            Self::Pounds => "lb",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Self::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Self::Pounds),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight unit: '{other}'. Valid options: kg, lb"
            ))),
        }
    }
}
