// ABOUTME: Integration tests for calendar-day classification and date/time labels
// ABOUTME: Uses fixed clocks to test midnight crossings, offsets, and locales
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Datelike, Duration, Timelike};
use common::{calendar, offset, utc, utc_calendar};
use fittrack::calendar::{timestamp_from_millis, Calendar, Clock, FixedClock};
use fittrack::errors::ErrorCode;
use fittrack::Locale;
use std::sync::Arc;

#[test]
fn test_is_today_for_current_instant() {
    let now = utc(2025, 3, 24, 15, 5);
    let cal = utc_calendar(now);
    assert!(cal.is_today(&now));
    assert!(!cal.is_tomorrow(&now));
}

#[test]
fn test_is_today_ignores_time_of_day() {
    let cal = utc_calendar(utc(2025, 3, 24, 12, 0));
    assert!(cal.is_today(&utc(2025, 3, 24, 0, 0)));
    assert!(cal.is_today(&utc(2025, 3, 24, 23, 59)));
    assert!(!cal.is_today(&utc(2025, 3, 23, 23, 59)));
}

#[test]
fn test_is_tomorrow_follows_calendar_days_not_elapsed_hours() {
    let late = utc(2025, 3, 24, 23, 59);
    let cal = utc_calendar(late);

    // Two minutes later, but across midnight
    assert!(cal.is_tomorrow(&(late + Duration::minutes(2))));
    // Just over 24 hours later, but two calendar days ahead
    assert!(!cal.is_tomorrow(&(late + Duration::hours(24) + Duration::minutes(2))));

    let early = utc(2025, 3, 24, 0, 1);
    let cal = utc_calendar(early);
    // 25 hours later, still the next calendar day
    assert!(cal.is_tomorrow(&(early + Duration::hours(25))));
    // 23 hours later, same calendar day
    assert!(!cal.is_tomorrow(&(early + Duration::hours(23))));
}

#[test]
fn test_is_tomorrow_across_month_and_year_end() {
    let cal = utc_calendar(utc(2024, 12, 31, 20, 0));
    assert!(cal.is_tomorrow(&utc(2025, 1, 1, 8, 0)));
    let cal = utc_calendar(utc(2024, 2, 28, 20, 0));
    assert!(cal.is_tomorrow(&utc(2024, 2, 29, 8, 0)));
}

#[test]
fn test_offset_changes_calendar_day() {
    let now = utc(2025, 3, 24, 23, 30);
    let morning = utc(2025, 3, 25, 10, 0);

    let in_utc = utc_calendar(now);
    assert!(in_utc.is_tomorrow(&morning));

    // 01:30 on the 25th in UTC+2
    let in_berlin_summer = calendar(now, offset(2, 0), Locale::EnUs);
    assert!(in_berlin_summer.is_today(&morning));
}

#[test]
fn test_day_of_week() {
    let cal = utc_calendar(utc(2025, 3, 24, 9, 0));
    assert_eq!(cal.day_of_week(&utc(2025, 3, 24, 9, 0)), "Monday");
    assert_eq!(cal.day_of_week(&utc(2025, 3, 30, 9, 0)), "Sunday");

    let german = calendar(utc(2025, 3, 24, 9, 0), offset(0, 0), Locale::DeDe);
    assert_eq!(german.day_of_week(&utc(2025, 3, 27, 9, 0)), "Donnerstag");
}

#[test]
fn test_format_date_relative_labels() {
    let now = utc(2025, 3, 24, 9, 0);
    let cal = utc_calendar(now);
    assert_eq!(cal.format_date(&utc(2025, 3, 24, 0, 0)), "Today");
    assert_eq!(cal.format_date(&utc(2025, 3, 24, 23, 59)), "Today");
    assert_eq!(cal.format_date(&utc(2025, 3, 25, 18, 30)), "Tomorrow");
}

#[test]
fn test_format_date_weekday_month_day() {
    let now = utc(2025, 3, 24, 9, 0);
    let thursday = utc(2025, 3, 27, 9, 0);
    let yesterday = utc(2025, 3, 23, 9, 0);

    assert_eq!(utc_calendar(now).format_date(&thursday), "Thursday, Mar 27");
    assert_eq!(utc_calendar(now).format_date(&yesterday), "Sunday, Mar 23");
    assert_eq!(
        calendar(now, offset(0, 0), Locale::EnGb).format_date(&thursday),
        "Thursday 27 Mar"
    );
    assert_eq!(
        calendar(now, offset(0, 0), Locale::DeDe).format_date(&thursday),
        "Donnerstag, 27. März"
    );
}

#[test]
fn test_format_date_localized_relative_labels() {
    let now = utc(2025, 3, 24, 9, 0);
    let cal = calendar(now, offset(0, 0), Locale::DeDe);
    assert_eq!(cal.format_date(&now), "Heute");
    assert_eq!(cal.format_date(&utc(2025, 3, 25, 9, 0)), "Morgen");
}

#[test]
fn test_format_time_twelve_hour_clock() {
    let cal = utc_calendar(utc(2025, 3, 24, 9, 0));
    assert_eq!(cal.format_time(&utc(2025, 3, 24, 15, 5)), "3:05 PM");
    assert_eq!(cal.format_time(&utc(2025, 3, 24, 9, 7)), "9:07 AM");
    assert_eq!(cal.format_time(&utc(2025, 3, 24, 0, 0)), "12:00 AM");
    assert_eq!(cal.format_time(&utc(2025, 3, 24, 12, 0)), "12:00 PM");
    assert_eq!(cal.format_time(&utc(2025, 3, 24, 23, 59)), "11:59 PM");
}

#[test]
fn test_format_time_uses_calendar_offset() {
    let cal = calendar(utc(2025, 3, 24, 9, 0), offset(5, 30), Locale::EnUs);
    assert_eq!(cal.format_time(&utc(2025, 3, 24, 10, 0)), "3:30 PM");
}

#[test]
fn test_parse_date_accepts_rfc3339_and_bare_dates() {
    let cal = calendar(utc(2025, 3, 24, 9, 0), offset(2, 0), Locale::EnUs);

    let timestamp = cal.parse_date("2025-03-24T15:05:00+01:00").unwrap();
    assert_eq!(timestamp.hour(), 15);
    assert_eq!(cal.format_time(&timestamp), "4:05 PM");

    let bare = cal.parse_date("2025-03-25").unwrap();
    assert_eq!((bare.year(), bare.month(), bare.day()), (2025, 3, 25));
    assert_eq!(bare.hour(), 0);
    assert_eq!(bare.offset().local_minus_utc(), 7200);
    assert!(cal.is_tomorrow(&bare));
}

#[test]
fn test_parse_date_rejects_invalid_input() {
    let cal = utc_calendar(utc(2025, 3, 24, 9, 0));
    for input in ["2025-02-30", "yesterday", "", "24/03/2025"] {
        let err = cal.parse_date(input).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDate, "input {input:?}");
    }
}

#[test]
fn test_timestamp_from_millis() {
    let epoch = timestamp_from_millis(0).unwrap();
    assert_eq!(epoch, utc(1970, 1, 1, 0, 0));
    assert_eq!(
        timestamp_from_millis(i64::MAX).unwrap_err().code,
        ErrorCode::InvalidDate
    );
}

#[test]
fn test_shared_clock_trait_object() {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(utc(2025, 3, 24, 9, 0)));
    let cal = Calendar::new(clock, offset(0, 0), Locale::EnUs);
    assert_eq!(cal.today().day(), 24);
    assert_eq!(cal.locale(), Locale::EnUs);
}
