// ABOUTME: Clinical thresholds and formula coefficients for body and exercise metrics
// ABOUTME: BMI category bounds, MET-style intensity multipliers, 1RM constants, trend bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

/// BMI category lower bounds (WHO adult classification)
pub mod bmi {
    /// Lower bound of the normal range (inclusive)
    pub const NORMAL_MIN: f64 = 18.5;
    /// Lower bound of the overweight range (inclusive)
    pub const OVERWEIGHT_MIN: f64 = 25.0;
    /// Lower bound of the obese range (inclusive)
    pub const OBESE_MIN: f64 = 30.0;
}

/// Calorie burn multipliers per intensity, in kcal per kg per hour
pub mod intensity {
    /// Low intensity multiplier
    pub const LOW_MULTIPLIER: f64 = 3.0;
    /// Medium intensity multiplier
    pub const MEDIUM_MULTIPLIER: f64 = 5.0;
    /// High intensity multiplier
    pub const HIGH_MULTIPLIER: f64 = 8.0;
}

/// One-rep-max estimation constants
pub mod one_rep_max {
    /// Brzycki numerator coefficient
    pub const BRZYCKI_NUMERATOR: f64 = 36.0;
    /// Brzycki denominator offset; reps must stay strictly below this
    pub const BRZYCKI_REP_LIMIT: u32 = 37;
    /// Epley divisor
    pub const EPLEY_DIVISOR: f64 = 30.0;
    /// Lombardi exponent
    pub const LOMBARDI_EXPONENT: f64 = 0.10;
    /// Minimum accepted repetitions
    pub const MIN_REPS: u32 = 1;
    /// Maximum accepted repetitions
    pub const MAX_REPS: u32 = BRZYCKI_REP_LIMIT - 1;
}

/// Progress trend bands
pub mod progress {
    /// Percent change above which a metric is increasing (below the negation, decreasing)
    pub const TREND_THRESHOLD_PERCENT: f64 = 1.0;
    /// Scale from ratio to percent
    pub const PERCENT_SCALE: f64 = 100.0;
}
