// ABOUTME: Display configuration (locale and UTC offset) read from environment variables
// ABOUTME: Builds calendars so presentation code never touches host locale or time zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

//! Display configuration
//!
//! | Variable              | Format            | Default                 |
//! |-----------------------|-------------------|-------------------------|
//! | `FITTRACK_LOCALE`     | `en-US`, `de-DE`  | `en-US`                 |
//! | `FITTRACK_UTC_OFFSET` | `+HH:MM`, `Z`     | host offset at load time |

use crate::calendar::{Calendar, Clock};
use crate::errors::{AppError, AppResult};
use chrono::{FixedOffset, Local, Offset};
use fittrack_core::constants::env_vars;
use fittrack_core::Locale;
use std::env;
use tracing::info;

/// Locale and time zone used to render numbers and dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Display locale
    pub locale: Locale,
    /// UTC offset for calendar-day evaluation
    pub utc_offset: FixedOffset,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            utc_offset: host_offset(),
        }
    }
}

impl DisplayConfig {
    /// Create a configuration from explicit values
    #[must_use]
    pub const fn new(locale: Locale, utc_offset: FixedOffset) -> Self {
        Self { locale, utc_offset }
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults; set but malformed
    /// variables are errors.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` if either variable cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        let locale = match env::var(env_vars::LOCALE) {
            Ok(raw) => raw.parse::<Locale>().map_err(|e| {
                AppError::config(format!("Invalid {}: {}", env_vars::LOCALE, e.message))
            })?,
            Err(_) => Locale::default(),
        };

        let utc_offset = match env::var(env_vars::UTC_OFFSET) {
            Ok(raw) => parse_utc_offset(&raw)?,
            Err(_) => host_offset(),
        };

        let config = Self { locale, utc_offset };
        info!(
            locale = %config.locale,
            utc_offset = %config.utc_offset,
            "Loaded display configuration"
        );
        Ok(config)
    }

    /// Calendar bound to this configuration and `clock`
    #[must_use]
    pub fn calendar<C: Clock>(&self, clock: C) -> Calendar<C> {
        Calendar::new(clock, self.utc_offset, self.locale)
    }
}

/// Parse a UTC offset such as `+02:00`, `-0530`, or `Z`
///
/// # Errors
///
/// Returns `ErrorCode::ConfigInvalid` if `raw` is not a valid offset
pub fn parse_utc_offset(raw: &str) -> AppResult<FixedOffset> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0)
            .ok_or_else(|| AppError::internal("zero UTC offset is unrepresentable"));
    }
    trimmed.parse::<FixedOffset>().map_err(|e| {
        AppError::config(format!(
            "Invalid {}: '{trimmed}' is not a UTC offset like +02:00 ({e})",
            env_vars::UTC_OFFSET
        ))
    })
}

fn host_offset() -> FixedOffset {
    Local::now().offset().fix()
}
