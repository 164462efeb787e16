// ABOUTME: Core types and constants for the FitTrack domain-utility library
// ABOUTME: Foundation crate with error handling, clinical constants, domain enums, and locales
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![deny(unsafe_code)]

//! # FitTrack Core
//!
//! Foundation crate providing shared types and constants for the FitTrack
//! fitness tracking utilities. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Unit conversions, clinical thresholds, and formula constants
//! - **models**: Domain enumerations (`Intensity`, `BmiCategory`, `ProgressTrend`, `WeightUnit`)
//! - **locale**: Display locales with number separators and calendar name tables

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Domain enumerations shared by calculations and presentation code
pub mod models;

/// Display locales for number and date formatting
pub mod locale;

pub use errors::{AppError, AppResult, ErrorCode};
pub use locale::Locale;
