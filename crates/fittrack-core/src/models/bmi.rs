// ABOUTME: BMI classification into four ordered categories
// ABOUTME: Half-open intervals with inclusive lower bounds at 18.5, 25, and 30
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use crate::constants::thresholds::bmi::{NORMAL_MIN, OBESE_MIN, OVERWEIGHT_MIN};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Adult BMI category
///
/// Variants are declared in ascending order so `Ord` follows the BMI scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI in `[0, 18.5)`
    Underweight,
    /// BMI in `[18.5, 25)`
    Normal,
    /// BMI in `[25, 30)`
    Overweight,
    /// BMI in `[30, ∞)`
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value that is already known to be non-negative
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_MIN {
            Self::Underweight
        } else if bmi < OVERWEIGHT_MIN {
            Self::Normal
        } else if bmi < OBESE_MIN {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label as shown on dashboard cards
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Inclusive lower bound of this category
    #[must_use]
    pub const fn lower_bound(self) -> f64 {
        match self {
            Self::Underweight => 0.0,
            Self::Normal => NORMAL_MIN,
            Self::Overweight => OVERWEIGHT_MIN,
            Self::Obese => OBESE_MIN,
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BmiCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "underweight" => Ok(Self::Underweight),
            "normal" => Ok(Self::Normal),
            "overweight" => Ok(Self::Overweight),
            "obese" => Ok(Self::Obese),
            other => Err(AppError::invalid_input(format!(
                "Unknown BMI category: '{other}'. Valid options: underweight, normal, overweight, obese"
            ))),
        }
    }
}
