// ABOUTME: Unified error handling re-exported from fittrack-core
// ABOUTME: Error codes, AppError, AppResult, and input validation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

pub use fittrack_core::errors::*;
