// ABOUTME: Progress calculations comparing successive measurements
// ABOUTME: Percent change with a zero-baseline guard and one-percent trend bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use crate::errors::{require_finite, require_finite_result, AppError, AppResult};
use fittrack_core::constants::thresholds::progress::PERCENT_SCALE;
use fittrack_core::models::ProgressTrend;
use tracing::{debug, trace};

/// Percent change from `previous` to `current`
///
/// Formula: `(current − previous) / previous × 100`
///
/// # Errors
///
/// Returns `ErrorCode::ValueOutOfRange` when `previous` is zero or the
/// change overflows `f64`, and `ErrorCode::InvalidInput` for non-finite values
pub fn percent_change(current: f64, previous: f64) -> AppResult<f64> {
    let current = require_finite("current", current)?;
    let previous = require_finite("previous", previous)?;
    if previous == 0.0 {
        debug!(current, "rejected zero baseline for percent change");
        return Err(AppError::out_of_range(
            "Previous value must be non-zero to compute a percent change",
        ));
    }
    let change = require_finite_result(
        "percent change",
        (current - previous) / previous * PERCENT_SCALE,
    )?;
    trace!(current, previous, change, "calculated percent change");
    Ok(change)
}

/// Classify the change between two measurements
///
/// More than +1% is `Increasing`, less than −1% is `Decreasing`, anything in
/// between (bounds included) is `Stable`.
///
/// # Errors
///
/// Propagates the validation errors of [`percent_change`]
pub fn get_progress_trend(current: f64, previous: f64) -> AppResult<ProgressTrend> {
    let trend = ProgressTrend::from_percent_change(percent_change(current, previous)?);
    trace!(current, previous, trend = trend.name(), "classified progress trend");
    Ok(trend)
}
