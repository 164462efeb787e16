// ABOUTME: Configuration module for display settings loaded from the environment
// ABOUTME: Environment-only configuration with documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

/// Locale and UTC offset used by formatting and calendar classification
pub mod display;

pub use display::DisplayConfig;
