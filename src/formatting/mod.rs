// ABOUTME: Locale-aware number formatting and character-safe text truncation
// ABOUTME: Presentation helpers used by dashboard cards and meal suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

/// Digit grouping and decimal rendering
pub mod number;

/// Ellipsis truncation
pub mod text;

pub use number::format_number;
pub use text::truncate_text;
