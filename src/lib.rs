// ABOUTME: Main library entry point for FitTrack fitness tracking utilities
// ABOUTME: Body, exercise, and progress metrics plus locale-aware number and date formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack
//!
//! Deterministic domain utilities behind a fitness and diet tracking
//! dashboard: BMI and its category, calorie burn, one-rep-max, progress
//! trends, and the number/text/date labels shown on workout and meal cards.
//!
//! ## Features
//!
//! - **Guarded math**: degenerate inputs (zero height, reps ≥ 37, a zero
//!   baseline) fail with [`errors::AppError`] instead of producing `NaN`
//! - **Injectable time**: calendar checks take a [`calendar::Clock`], never the wall clock directly
//! - **Explicit locale**: number and date formatting take a [`Locale`] and UTC offset
//!
//! ## Architecture
//!
//! - **metrics**: Pure numeric calculations
//! - **formatting**: Number grouping and text truncation
//! - **calendar**: Clock, calendar-day classification, and date/time labels
//! - **config**: Display settings from environment variables
//! - **logging**: `tracing-subscriber` setup for hosts and the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use fittrack::metrics::{calculate_calories_burned, calculate_one_rep_max, get_progress_trend};
//! use fittrack::models::{Intensity, ProgressTrend};
//!
//! assert_eq!(calculate_calories_burned(70.0, 60, Intensity::Medium)?, 350);
//! assert_eq!(calculate_one_rep_max(100.0, 10)?, 133);
//! assert_eq!(get_progress_trend(110.0, 100.0)?, ProgressTrend::Increasing);
//! # Ok::<(), fittrack::errors::AppError>(())
//! ```

/// Calendar-day classification and date/time formatting
pub mod calendar;

/// Display configuration loaded from the environment
pub mod config;

/// Unified error handling system with standard error codes
pub mod errors;

/// Number and text formatting helpers
pub mod formatting;

/// Logging configuration and tracing subscriber setup
pub mod logging;

/// Body, exercise, and progress metric calculations
pub mod metrics;

/// Domain enumerations re-exported from fittrack-core
pub mod models {
    pub use fittrack_core::models::*;
}

/// Application constants re-exported from fittrack-core
pub mod constants {
    pub use fittrack_core::constants::*;
}

pub use fittrack_core::Locale;
