// ABOUTME: Body Mass Index calculation and WHO category classification
// ABOUTME: Converts centimeters to meters and guards zero or negative heights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use crate::errors::{
    require_finite, require_finite_result, require_non_negative, AppError, AppResult,
};
use fittrack_core::constants::units::CM_PER_METER;
use fittrack_core::models::BmiCategory;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Calculate Body Mass Index
///
/// Formula: `weight_kg / (height_cm / 100)²`
///
/// # Arguments
///
/// * `weight_kg` - Body weight in kilograms (finite, non-negative)
/// * `height_cm` - Height in centimeters (finite, strictly positive)
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` for a zero or negative height, a
/// negative weight, or a result that overflows `f64` (a vanishingly small
/// height), and `ErrorCode::InvalidInput` for non-finite values
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    let weight_kg = require_non_negative("weight", weight_kg)?;
    let height_cm = require_finite("height", height_cm)?;
    if height_cm <= 0.0 {
        debug!(height_cm, "rejected non-positive height for BMI");
        return Err(AppError::out_of_range(format!(
            "Height must be greater than 0 cm, got {height_cm}"
        )));
    }

    let height_m = height_cm / CM_PER_METER;
    let bmi = require_finite_result("BMI", weight_kg / (height_m * height_m))?;
    trace!(weight_kg, height_cm, bmi, "calculated BMI");
    Ok(bmi)
}

/// Classify a BMI value
///
/// Boundaries are inclusive of the lower bound: 18.5 is `Normal`, 25.0 is
/// `Overweight`, 30.0 is `Obese`.
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` for a negative BMI and
/// `ErrorCode::InvalidInput` for `NaN`
pub fn calculate_bmi_category(bmi: f64) -> AppResult<BmiCategory> {
    if bmi.is_nan() {
        return Err(AppError::invalid_input("BMI must be a number, got NaN"));
    }
    if bmi < 0.0 {
        debug!(bmi, "rejected negative BMI");
        return Err(AppError::out_of_range(format!(
            "BMI must not be negative, got {bmi}"
        )));
    }
    Ok(BmiCategory::from_bmi(bmi))
}

/// BMI together with its category, as rendered by the progress summary card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    /// Body Mass Index in kg/m²
    pub bmi: f64,
    /// Category of `bmi`
    pub category: BmiCategory,
}

impl BmiReport {
    /// Calculate BMI and classify it in one step
    ///
    /// # Errors
    ///
    /// Propagates the input validation errors of [`calculate_bmi`]
    pub fn from_measurements(weight_kg: f64, height_cm: f64) -> AppResult<Self> {
        let bmi = calculate_bmi(weight_kg, height_cm)?;
        Ok(Self {
            bmi,
            category: calculate_bmi_category(bmi)?,
        })
    }
}
