// ABOUTME: Domain enumerations shared by metric calculations and presentation code
// ABOUTME: Intensity levels, BMI categories, progress trends, and weight units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Domain models
//!
//! All enums serialize as `snake_case` strings and parse case-insensitively
//! through `FromStr`, so the same names round-trip through JSON payloads,
//! command-line arguments, and environment values.

/// Workout intensity and its calorie multiplier
pub mod intensity;

/// BMI classification
pub mod bmi;

/// Direction of change between two measurements
pub mod trend;

/// Weight units and conversions
pub mod measurement;

pub use bmi::BmiCategory;
pub use intensity::Intensity;
pub use measurement::WeightUnit;
pub use trend::ProgressTrend;
