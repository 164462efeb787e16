// ABOUTME: Exercise calculations for calorie burn and one-rep-max estimation
// ABOUTME: Intensity multiplier table plus Brzycki, Epley, and Lombardi 1RM formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use crate::errors::{require_finite_result, require_non_negative, AppError, AppResult};
use fittrack_core::constants::thresholds::one_rep_max::{
    BRZYCKI_NUMERATOR, BRZYCKI_REP_LIMIT, EPLEY_DIVISOR, LOMBARDI_EXPONENT, MAX_REPS, MIN_REPS,
};
use fittrack_core::constants::units::MINUTES_PER_HOUR;
use fittrack_core::models::Intensity;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Estimate calories burned during a workout
///
/// Formula: `round(weight_kg × multiplier × duration_minutes / 60)` with
/// multipliers low = 3, medium = 5, high = 8.
///
/// Inputs are non-negative, so `f64::round` (half away from zero) agrees with
/// round-half-up: a product of exactly `x.5` rounds to `x + 1`.
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` for a negative weight or a result
/// larger than `u32::MAX`, and `ErrorCode::InvalidInput` for a non-finite weight
pub fn calculate_calories_burned(
    weight_kg: f64,
    duration_minutes: u32,
    intensity: Intensity,
) -> AppResult<u32> {
    let weight_kg = require_non_negative("weight", weight_kg)?;
    let calories =
        (weight_kg * intensity.multiplier() * f64::from(duration_minutes) / MINUTES_PER_HOUR)
            .round();
    let calories = to_u32("calories", calories)?;
    trace!(
        weight_kg,
        duration_minutes,
        intensity = intensity.name(),
        calories,
        "calculated calories burned"
    );
    Ok(calories)
}

/// Estimate a one-rep-max with the Brzycki formula
///
/// Formula: `round(weight × 36 / (37 − reps))`. A single rep returns the
/// lifted weight.
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` when `reps` is outside `1..=36` or
/// the weight is negative
pub fn calculate_one_rep_max(weight: f64, reps: u32) -> AppResult<u32> {
    let estimate = OneRepMaxFormula::Brzycki.estimate(weight, reps)?;
    to_u32("one-rep-max", estimate.round())
}

/// One-rep-max estimation formula
///
/// - `Brzycki`: `w × 36 / (37 − r)` (default, most accurate below 10 reps)
/// - `Epley`: `w × (1 + r / 30)`
/// - `Lombardi`: `w × r^0.10`
///
/// # Scientific References
///
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue." *JOPERD*, 64(1), 88-90.
/// - Epley, B. (1985). "Poundage chart." *Boyd Epley Workout*.
/// - `LeSuer`, D.A. et al. (1997). "The accuracy of prediction equations for estimating 1-RM performance." *J Strength Cond Res*, 11(4), 211-213.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxFormula {
    /// Brzycki formula: weight × 36 / (37 − reps)
    #[default]
    Brzycki,
    /// Epley formula: weight × (1 + reps / 30)
    Epley,
    /// Lombardi formula: weight × reps^0.10
    Lombardi,
}

impl OneRepMaxFormula {
    /// Estimate the unrounded one-rep-max from a submaximal set
    ///
    /// All formulas share the `1..=36` repetition contract so switching
    /// formulas never changes which inputs are accepted.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` when `reps` is outside `1..=36`,
    /// the weight is negative, or the estimate overflows `f64`, and
    /// `ErrorCode::InvalidInput` for a non-finite weight
    pub fn estimate(self, weight: f64, reps: u32) -> AppResult<f64> {
        let weight = require_non_negative("weight", weight)?;
        if !(MIN_REPS..=MAX_REPS).contains(&reps) {
            debug!(reps, formula = self.name(), "rejected repetition count");
            return Err(AppError::out_of_range(format!(
                "Reps must be between {MIN_REPS} and {MAX_REPS}, got {reps}"
            )));
        }

        let reps_f64 = f64::from(reps);
        let estimate = match self {
            Self::Brzycki => {
                weight * BRZYCKI_NUMERATOR / f64::from(BRZYCKI_REP_LIMIT - reps)
            }
            Self::Epley => weight * (1.0 + reps_f64 / EPLEY_DIVISOR),
            Self::Lombardi => weight * reps_f64.powf(LOMBARDI_EXPONENT),
        };
        let estimate = require_finite_result("one-rep-max", estimate)?;
        trace!(weight, reps, formula = self.name(), estimate, "estimated one-rep-max");
        Ok(estimate)
    }

    /// Get formula name for logging and debugging
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brzycki => "brzycki",
            Self::Epley => "epley",
            Self::Lombardi => "lombardi",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Brzycki => "weight x 36 / (37 - reps)",
            Self::Epley => "weight x (1 + reps / 30)",
            Self::Lombardi => "weight x reps^0.10",
        }
    }
}

impl fmt::Display for OneRepMaxFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OneRepMaxFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "brzycki" => Ok(Self::Brzycki),
            "epley" => Ok(Self::Epley),
            "lombardi" => Ok(Self::Lombardi),
            other => Err(AppError::invalid_input(format!(
                "Unknown one-rep-max formula: '{other}'. Valid options: brzycki, epley, lombardi"
            ))),
        }
    }
}

fn to_u32(name: &str, rounded: f64) -> AppResult<u32> {
    if rounded > f64::from(u32::MAX) {
        return Err(AppError::out_of_range(format!(
            "{name} result {rounded} exceeds the representable range"
        )));
    }
    Ok(rounded as u32)
}
