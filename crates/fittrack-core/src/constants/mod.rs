// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for body metrics, exercise formulas, progress, and display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Clinical and formula constants used by the metric calculations
pub mod thresholds;

/// Display defaults for formatting and configuration
pub mod display {
    /// Marker appended to truncated text
    pub const ELLIPSIS: &str = "...";

    /// Maximum number of fraction digits rendered by number formatting
    pub const MAX_FRACTION_DIGITS: usize = 3;

    /// Digits per thousands group
    pub const GROUP_SIZE: usize = 3;
}

/// Environment variable names read by configuration loaders
pub mod env_vars {
    /// Display locale tag (e.g. `en-US`)
    pub const LOCALE: &str = "FITTRACK_LOCALE";

    /// Display UTC offset (e.g. `+02:00`)
    pub const UTC_OFFSET: &str = "FITTRACK_UTC_OFFSET";
}

/// Service names for structured logging
pub mod service_names {
    /// Default service name reported in log records
    pub const FITTRACK: &str = "fittrack";
}
