// ABOUTME: Unit conversion constants for mass, length, and time
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

/// Centimeters per meter conversion factor
pub const CM_PER_METER: f64 = 100.0;

/// Kilograms per international avoirdupois pound
pub const KG_PER_POUND: f64 = 0.453_592_37;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Hours in a 12-hour clock cycle
pub const HOURS_PER_HALF_DAY: u32 = 12;
