// ABOUTME: Body, exercise, and progress metric calculations for dashboard widgets
// ABOUTME: Pure functions that validate inputs and return AppResult values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Metric calculations
//!
//! Every function is referentially transparent and safe to call from any
//! thread. Inputs outside a formula's domain are rejected with
//! `ErrorCode::ValueOutOfRange` (or `InvalidInput` for non-finite values)
//! rather than propagating `NaN` or infinity.
//!
//! # Example
//!
//! ```rust
//! use fittrack::metrics::{calculate_bmi, calculate_bmi_category};
//! use fittrack::models::BmiCategory;
//!
//! let bmi = calculate_bmi(70.0, 175.0)?;
//! assert_eq!(calculate_bmi_category(bmi)?, BmiCategory::Normal);
//! # Ok::<(), fittrack::errors::AppError>(())
//! ```

/// BMI and BMI classification
pub mod body;

/// Calorie burn and one-rep-max estimation
pub mod exercise;

/// Percent change and progress trend
pub mod progress;

pub use body::{calculate_bmi, calculate_bmi_category, BmiReport};
pub use exercise::{calculate_calories_burned, calculate_one_rep_max, OneRepMaxFormula};
pub use progress::{get_progress_trend, percent_change};
