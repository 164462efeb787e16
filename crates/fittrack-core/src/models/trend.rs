// ABOUTME: Categorical direction of change between successive measurements
// ABOUTME: Increasing, decreasing, or stable within a one-percent band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use crate::constants::thresholds::progress::TREND_THRESHOLD_PERCENT;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a progress metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTrend {
    /// Percent change above +1%
    Increasing,
    /// Percent change below -1%
    Decreasing,
    /// Percent change within [-1%, +1%]
    Stable,
}

impl ProgressTrend {
    /// Classify a finite percent change
    #[must_use]
    pub fn from_percent_change(percent: f64) -> Self {
        if percent > TREND_THRESHOLD_PERCENT {
            Self::Increasing
        } else if percent < -TREND_THRESHOLD_PERCENT {
            Self::Decreasing
        } else {
            Self::Stable
        }
    }

    /// Get trend name for logging and serialization
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for ProgressTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProgressTrend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "increasing" => Ok(Self::Increasing),
            "decreasing" => Ok(Self::Decreasing),
            "stable" => Ok(Self::Stable),
            other => Err(AppError::invalid_input(format!(
                "Unknown progress trend: '{other}'. Valid options: increasing, decreasing, stable"
            ))),
        }
    }
}
