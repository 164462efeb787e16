// ABOUTME: Calendar bound to a clock, UTC offset, and locale for date classification
// ABOUTME: Weekday names, Today/Tomorrow labels, 12-hour times, and strict date parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

use super::clock::{Clock, SystemClock};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use fittrack_core::constants::units::HOURS_PER_HALF_DAY;
use fittrack_core::Locale;
use tracing::debug;

/// Calendar evaluated in a fixed UTC offset with a display locale
///
/// The calendar owns its clock so classification never reads global state.
#[derive(Debug, Clone)]
pub struct Calendar<C: Clock = SystemClock> {
    clock: C,
    offset: FixedOffset,
    locale: Locale,
}

impl Calendar<SystemClock> {
    /// Calendar driven by wall-clock time
    #[must_use]
    pub const fn system(offset: FixedOffset, locale: Locale) -> Self {
        Self::new(SystemClock, offset, locale)
    }
}

impl<C: Clock> Calendar<C> {
    /// Create a calendar from a clock, display offset, and locale
    #[must_use]
    pub const fn new(clock: C, offset: FixedOffset, locale: Locale) -> Self {
        Self {
            clock,
            offset,
            locale,
        }
    }

    /// Display offset used for calendar-day projection
    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Display locale
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Current calendar date in the display offset
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.now().with_timezone(&self.offset).date_naive()
    }

    /// Calendar date of `date` in the display offset
    #[must_use]
    pub fn local_date<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> NaiveDate {
        date.with_timezone(&self.offset).date_naive()
    }

    /// Full weekday name of `date` in the calendar's locale (e.g. `"Monday"`)
    #[must_use]
    pub fn day_of_week<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> &'static str {
        self.locale.weekday_name(self.local_date(date).weekday())
    }

    /// Whether `date` falls on the current calendar day
    #[must_use]
    pub fn is_today<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> bool {
        self.local_date(date) == self.today()
    }

    /// Whether `date` falls on the calendar day after the current one
    #[must_use]
    pub fn is_tomorrow<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> bool {
        self.today()
            .succ_opt()
            .is_some_and(|tomorrow| self.local_date(date) == tomorrow)
    }

    /// Relative or weekday/month/day label for `date`
    ///
    /// Returns the locale's "Today" or "Tomorrow" label when applicable,
    /// otherwise e.g. `"Monday, Mar 24"` in `en-US`.
    #[must_use]
    pub fn format_date<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String {
        let local = self.local_date(date);
        let today = self.today();
        if local == today {
            return self.locale.today_label().to_owned();
        }
        if today.succ_opt() == Some(local) {
            return self.locale.tomorrow_label().to_owned();
        }
        self.locale
            .weekday_month_day(local.weekday(), local.month(), local.day())
    }

    /// 12-hour clock time with `AM`/`PM` suffix (e.g. `"3:05 PM"`)
    ///
    /// Midnight renders as `"12:00 AM"` and noon as `"12:00 PM"`.
    #[must_use]
    pub fn format_time<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String {
        let local = date.with_timezone(&self.offset);
        let is_pm = local.hour() >= HOURS_PER_HALF_DAY;
        let hour = match local.hour() % HOURS_PER_HALF_DAY {
            0 => HOURS_PER_HALF_DAY,
            hour => hour,
        };
        let suffix = if is_pm { "PM" } else { "AM" };
        format!("{hour}:{:02} {suffix}", local.minute())
    }

    /// Parse a date supplied as text
    ///
    /// Accepts RFC 3339 timestamps (`2025-03-24T15:05:00+01:00`) and bare
    /// dates (`2025-03-24`), the latter interpreted as midnight in the
    /// calendar's offset.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidDate` when `input` matches neither form or
    /// names a date that does not exist
    pub fn parse_date(&self, input: &str) -> AppResult<DateTime<FixedOffset>> {
        let input = input.trim();
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
            return Ok(timestamp);
        }

        let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| {
            debug!(input, error = %e, "rejected unparsable date");
            AppError::invalid_date(format!(
                "'{input}' is not an RFC 3339 timestamp or YYYY-MM-DD date"
            ))
        })?;
        date.and_hms_opt(0, 0, 0)
            .and_then(|midnight| self.offset.from_local_datetime(&midnight).single())
            .ok_or_else(|| AppError::invalid_date(format!("'{input}' has no local midnight")))
    }
}

/// Convert epoch milliseconds into a UTC instant
///
/// # Errors
///
/// Returns `ErrorCode::InvalidDate` when `millis` is outside chrono's
/// representable range
pub fn timestamp_from_millis(millis: i64) -> AppResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| {
        AppError::invalid_date(format!(
            "Timestamp {millis} ms is outside the representable date range"
        ))
    })
}
