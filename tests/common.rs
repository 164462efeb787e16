// ABOUTME: Shared test utilities for FitTrack integration tests
// ABOUTME: Builds calendars pinned to fixed instants and offsets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fittrack`

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use fittrack::calendar::{Calendar, FixedClock};
use fittrack::Locale;

/// UTC instant from calendar components
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap()
}

/// Offset east of UTC in hours and minutes
pub fn offset(hours: i32, minutes: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600 + minutes * 60).unwrap()
}

/// Calendar in UTC, en-US, pinned to `now`
pub fn utc_calendar(now: DateTime<Utc>) -> Calendar<FixedClock> {
    Calendar::new(FixedClock::new(now), offset(0, 0), Locale::EnUs)
}

/// Calendar with an explicit offset and locale, pinned to `now`
pub fn calendar(now: DateTime<Utc>, utc_offset: FixedOffset, locale: Locale) -> Calendar<FixedClock> {
    Calendar::new(FixedClock::new(now), utc_offset, locale)
}
